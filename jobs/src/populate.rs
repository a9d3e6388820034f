use std::fmt::Debug;
use std::hash::Hash;

use util::IdVec;

use crate::{Error, JobCollection, JobId};

/// Resolved dependency of each job, by id.
pub type Links = IdVec<JobId, Option<JobId>>;

/// Traversal state of a job while checking chains for cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// on the chain currently being walked
    InProgress,
    /// chain from here is known to terminate
    Done,
}

impl<C: Clone + Eq + Hash + Debug> JobCollection<C> {
    /// Resolve every job's dependency to a job in this collection,
    /// and check that every dependency chain terminates.
    ///
    /// On failure the collection is left unchanged.
    /// Does nothing if already populated since the last change.
    pub fn populate(&mut self) -> Result<(), Error<C>> {
        if self.links.is_some() {
            return Ok(());
        }
        let links = self.resolve_links()?;
        self.check_chains(&links)?;
        log::debug!(
            "populated {} jobs ({} with a dependency)",
            links.len(),
            links.iter().flatten().count(),
        );
        self.links = Some(links);
        Ok(())
    }

    fn resolve_links(&self) -> Result<Links, Error<C>> {
        let mut links = Links::with_capacity(self.jobs.len());
        for job in self.jobs.iter() {
            let link = match job.dependency() {
                None => None,
                Some(dependency) => match self.ids.get(dependency) {
                    Some(&id) => Some(id),
                    None => {
                        return Err(Error::UnknownDependency {
                            job: job.code().clone(),
                            dependency: dependency.clone(),
                        })
                    }
                },
            };
            links.push(link);
        }
        Ok(links)
    }

    /// Walk the chain from each job, in current order. Reaching a job that is
    /// still in progress on the same walk means the chain loops.
    fn check_chains(&self, links: &Links) -> Result<(), Error<C>> {
        let mut marks = IdVec::fill(Mark::Unvisited, links.len());
        let mut walk = Vec::with_capacity(8);

        for &start in &self.order {
            let mut next = Some(start);
            while let Some(id) = next {
                match marks[id] {
                    Mark::Done => break,
                    Mark::InProgress => {
                        let code = self.jobs[id].code();
                        log::debug!(
                            "chain from {:?} loops back to {:?}",
                            self.jobs[start].code(),
                            code,
                        );
                        return Err(Error::CircularDependency(code.clone()));
                    }
                    Mark::Unvisited => {
                        marks[id] = Mark::InProgress;
                        walk.push(id);
                        next = links[id];
                    }
                }
            }
            // a chain can't hold more distinct jobs than the collection does:
            debug_assert!(walk.len() <= links.len());
            log::trace!(
                "chain from {:?} visited {} new jobs",
                self.jobs[start].code(),
                walk.len()
            );
            for id in walk.drain(..) {
                marks[id] = Mark::Done;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Job, JobCollection};

    type Result<T> = std::result::Result<T, Error<char>>;

    fn jobs(pairs: &[(char, Option<char>)]) -> Result<JobCollection<char>> {
        JobCollection::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_no_dependencies() -> Result<()> {
        let mut col = jobs(&[('a', None), ('b', None)])?;
        col.populate()?;
        assert!(col.is_populated());
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        let mut col = JobCollection::<char>::new();
        col.populate()?;
        col.sort()?;
        assert_eq!(0, col.codes().count());
        Ok(())
    }

    #[test]
    fn test_unknown_dependency() -> Result<()> {
        let mut col = jobs(&[('a', Some('g')), ('b', None), ('c', None)])?;
        assert_eq!(
            Err(Error::UnknownDependency {
                job: 'a',
                dependency: 'g'
            }),
            col.populate(),
        );
        assert!(!col.is_populated());
        Ok(())
    }

    #[test]
    fn test_circular_dependency() -> Result<()> {
        let mut col = jobs(&[
            ('a', None),
            ('b', Some('c')),
            ('c', Some('f')),
            ('d', Some('a')),
            ('e', None),
            ('f', Some('b')),
        ])?;
        assert!(matches!(col.populate(), Err(Error::CircularDependency(_))));
        assert!(!col.is_populated());
        Ok(())
    }

    #[test]
    fn test_two_job_cycle() -> Result<()> {
        let mut col = jobs(&[('a', Some('b')), ('b', Some('a'))])?;
        assert_eq!(Err(Error::CircularDependency('a')), col.populate());
        Ok(())
    }

    #[test]
    fn test_cycle_reached_from_outside() -> Result<()> {
        // x leads into the b -> c -> b loop without being part of it:
        let mut col = jobs(&[('x', Some('b')), ('b', Some('c')), ('c', Some('b'))])?;
        assert_eq!(Err(Error::CircularDependency('b')), col.populate());
        Ok(())
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() -> Result<()> {
        let mut col = jobs(&[('a', Some('c')), ('b', Some('c')), ('c', None)])?;
        col.populate()?;
        Ok(())
    }

    #[test]
    fn test_long_chain() -> Result<()> {
        // deep chains are walked iteratively, so length isn't bounded by the stack:
        let n = 100_000u32;
        let mut col = JobCollection::with_capacity(n as usize);
        for i in 0..n {
            let job = if i + 1 < n {
                Job::with_dependency(i, i + 1).map_err(|e| e.map_code(|_| '?'))?
            } else {
                Job::new(i)
            };
            col.add_job(job).map_err(|e| e.map_code(|_| '?'))?;
        }
        col.populate().map_err(|e| e.map_code(|_| '?'))?;
        col.sort().map_err(|e| e.map_code(|_| '?'))?;
        assert_eq!(Some(&(n - 1)), col.codes().next());
        assert_eq!(Some(&0), col.codes().last());
        Ok(())
    }

    #[test]
    fn test_populate_is_idempotent() -> Result<()> {
        let mut col = jobs(&[('a', Some('b')), ('b', None)])?;
        col.populate()?;
        col.populate()?;
        assert!(col.is_populated());
        Ok(())
    }
}
