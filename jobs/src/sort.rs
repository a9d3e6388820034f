use std::fmt::Debug;
use std::hash::Hash;

use util::IdVec;

use crate::{Error, JobCollection, JobId, Links};

impl<C: Clone + Eq + Hash + Debug> JobCollection<C> {
    /// Reorder the jobs so that every job comes after its dependency chain.
    ///
    /// Populates the collection first if needed, so this fails the same way
    /// [`populate`](Self::populate) does, leaving the order untouched.
    /// Jobs that don't depend on each other keep their current relative order.
    pub fn sort(&mut self) -> Result<(), Error<C>> {
        self.populate()?;
        if let Some(links) = &self.links {
            let sorted = dependency_first(&self.order, links);
            debug_assert_eq!(sorted.len(), self.order.len());
            self.order = sorted;
        }
        log::debug!("sorted {} jobs", self.order.len());
        Ok(())
    }
}

/// Emit each job in `order` after its chain of dependencies, skipping jobs
/// already emitted. Assumes `links` has been checked for cycles.
fn dependency_first(order: &[JobId], links: &Links) -> Vec<JobId> {
    let mut emitted = IdVec::<JobId, bool>::fill(false, links.len());
    let mut sorted = Vec::with_capacity(order.len());
    let mut chain = Vec::with_capacity(8);

    for &start in order {
        let mut next = Some(start);
        while let Some(id) = next {
            if emitted[id] {
                break;
            }
            chain.push(id);
            next = links[id];
        }
        // deepest dependency first:
        while let Some(id) = chain.pop() {
            emitted[id] = true;
            sorted.push(id);
        }
    }
    sorted
}
