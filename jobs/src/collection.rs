use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use util::{HashMap, Hasher, IdVec};

use crate::{Error, Job, JobId, Links};

/// An ordered set of jobs, unique by code.
///
/// Jobs are stored once, in insertion order, and referred to by [`JobId`].
/// The collection keeps a separate output ordering, which starts out as
/// insertion order and is replaced by [`sort`](Self::sort).
#[derive(Debug, Clone)]
pub struct JobCollection<C> {
    /// every job, indexed by insertion order
    pub(crate) jobs: IdVec<JobId, Job<C>>,
    /// code -> id, for uniqueness checks and dependency lookups
    pub(crate) ids: HashMap<C, JobId>,
    /// current output order
    pub(crate) order: Vec<JobId>,
    /// resolved dependency of each job; `None` until populated,
    /// and reset whenever the set of jobs changes.
    pub(crate) links: Option<Links>,
}

impl<C> Default for JobCollection<C> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<C> JobCollection<C> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `cap` jobs.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            jobs: IdVec::with_capacity(cap),
            ids: HashMap::with_capacity_and_hasher(cap, Hasher::default()),
            order: Vec::with_capacity(cap),
            links: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// True if dependencies have been resolved since the last change.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.links.is_some()
    }

    /// Iterate through jobs in the current order.
    pub fn iter(&self) -> impl Iterator<Item = &Job<C>> {
        self.order.iter().map(move |&id| &self.jobs[id])
    }

    /// Job codes in the current order.
    pub fn codes(&self) -> impl Iterator<Item = &C> {
        self.iter().map(Job::code)
    }
}

/// Renders codes with no separator, e.g. `cba`.
impl<C: Display> Display for JobCollection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in self.codes() {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

impl<C: Clone + Eq + Hash + Debug> JobCollection<C> {
    /// Build a collection from jobs, in order. Fails on the first duplicate code.
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job<C>>) -> Result<Self, Error<C>> {
        let jobs = jobs.into_iter();
        let mut collection = Self::with_capacity(jobs.size_hint().0);
        for job in jobs {
            collection.add_job(job)?;
        }
        Ok(collection)
    }

    /// Build a collection from `(job, dependency)` pairs, in order.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (C, Option<C>)>,
    ) -> Result<Self, Error<C>> {
        let pairs = pairs.into_iter();
        let mut collection = Self::with_capacity(pairs.size_hint().0);
        for pair in pairs {
            collection.add_job(Job::try_from(pair)?)?;
        }
        Ok(collection)
    }

    /// Add `job` to the end of the collection.
    pub fn add_job(&mut self, job: Job<C>) -> Result<JobId, Error<C>> {
        if self.ids.contains_key(job.code()) {
            return Err(Error::DuplicateJob(job.code().clone()));
        }
        log::trace!("adding job {:?} (depends on {:?})", job.code(), job.dependency());
        let code = job.code().clone();
        let id = self.jobs.push(job);
        self.ids.insert(code, id);
        self.order.push(id);
        self.links = None;
        Ok(id)
    }

    /// True if a job with this code exists in the collection.
    pub fn contains(&self, code: &C) -> bool {
        self.ids.contains_key(code)
    }

    /// Get the job with this code, if it exists.
    pub fn find_job(&self, code: &C) -> Option<&Job<C>> {
        self.ids.get(code).map(|&id| &self.jobs[id])
    }

    /// Iterate through the dependency chain of the job with this code:
    /// its dependency, that job's dependency, and so on.
    /// `None` if the job doesn't exist or the collection isn't populated.
    pub fn dependency_chain(&self, code: &C) -> Option<Chain<'_, C>> {
        let links = self.links.as_ref()?;
        let id = *self.ids.get(code)?;
        Some(Chain {
            jobs: &self.jobs,
            links,
            next: links[id],
        })
    }
}

/// Iterator over a job's resolved dependency chain, nearest dependency first.
pub struct Chain<'a, C> {
    jobs: &'a IdVec<JobId, Job<C>>,
    links: &'a Links,
    next: Option<JobId>,
}

impl<'a, C> Iterator for Chain<'a, C> {
    type Item = &'a Job<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.links[id];
        Some(&self.jobs[id])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type Result<T> = std::result::Result<T, Error<&'static str>>;

    fn codes(jobs: &JobCollection<&'static str>) -> Vec<&'static str> {
        jobs.codes().copied().collect()
    }

    #[test]
    fn test_empty() {
        let jobs = JobCollection::<&str>::new();
        assert!(jobs.is_empty());
        assert_eq!("", jobs.to_string());
        assert_eq!(0, jobs.codes().count());
    }

    #[test]
    fn test_insertion_order() -> Result<()> {
        let jobs = JobCollection::from_pairs([("a", None), ("b", Some("c")), ("c", None)])?;
        assert_eq!(vec!["a", "b", "c"], codes(&jobs));
        assert_eq!(3, jobs.len());
        assert!(!jobs.is_populated());
        Ok(())
    }

    #[test]
    fn test_duplicate_fails() -> Result<()> {
        let mut jobs = JobCollection::from_jobs([Job::new("a"), Job::new("b")])?;
        assert_eq!(Err(Error::DuplicateJob("a")), jobs.add_job(Job::new("a")));
        assert_eq!(
            Err(Error::DuplicateJob("b")),
            JobCollection::from_pairs([("b", None), ("a", None), ("b", Some("a"))]).map(|_| ()),
        );
        Ok(())
    }

    #[test]
    fn test_self_dependency_pair_fails() {
        assert_eq!(
            Err(Error::SelfDependency("c")),
            JobCollection::from_pairs([("a", None), ("b", None), ("c", Some("c"))]).map(|_| ()),
        );
    }

    #[test]
    fn test_contains_and_find() -> Result<()> {
        let jobs = JobCollection::from_pairs([("a", Some("b")), ("b", None)])?;
        assert!(jobs.contains(&"a"));
        assert!(!jobs.contains(&"z"));
        assert_eq!(Some(&"b"), jobs.find_job(&"a").and_then(Job::dependency));
        assert!(jobs.find_job(&"z").is_none());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let jobs = JobCollection::from_pairs([("x", None), ("yy", None), ("z", None)])?;
        assert_eq!("xyyz", jobs.to_string());
        Ok(())
    }

    #[test]
    fn test_dependency_chain() -> Result<()> {
        let mut jobs =
            JobCollection::from_pairs([("a", Some("b")), ("b", Some("c")), ("c", None)])?;
        assert!(jobs.dependency_chain(&"a").is_none(), "not populated yet");
        jobs.populate()?;
        let chain: Vec<_> = jobs
            .dependency_chain(&"a")
            .into_iter()
            .flatten()
            .map(|job| *job.code())
            .collect();
        assert_eq!(vec!["b", "c"], chain);
        assert_eq!(Some(0), jobs.dependency_chain(&"c").map(Iterator::count));
        assert!(jobs.dependency_chain(&"z").is_none());
        Ok(())
    }

    #[test]
    fn test_add_job_resets_population() -> Result<()> {
        let mut jobs = JobCollection::from_pairs([("a", Some("b")), ("b", None)])?;
        jobs.populate()?;
        assert!(jobs.is_populated());
        jobs.add_job(Job::new("c"))?;
        assert!(!jobs.is_populated());
        Ok(())
    }
}
