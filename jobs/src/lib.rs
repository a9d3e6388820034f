//! Jobs that declare at most one dependency, and the collection that
//! validates and orders them.
//!
//! A [`JobCollection`] owns every [`Job`] in an id-indexed table. Jobs only
//! know their dependency by code until the collection is populated, which
//! resolves each code to a [`JobId`] and rejects unknown or circular
//! dependencies. Sorting then emits every job after its dependency chain.

/// A single job and its declared dependency.
mod job;
pub use job::Job;

/// Owning collection of unique jobs.
mod collection;
pub use collection::{Chain, JobCollection};

/// Resolve dependency codes to ids and check chains for cycles.
mod populate;
use populate::Links;

/// Dependency-first ordering of a populated collection.
mod sort;

util::typed_id!(JobId, u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<C> {
    #[error("Job \"{0}\" cannot depend on itself")]
    SelfDependency(C),
    #[error("Job \"{job}\" depends on \"{dependency}\", which is not a job in this list")]
    UnknownDependency { job: C, dependency: C },
    #[error("Circular dependency chain detected at job \"{0}\"")]
    CircularDependency(C),
    #[error("Job \"{0}\" is listed more than once")]
    DuplicateJob(C),
}

impl<C> Error<C> {
    /// Convert the job codes carried by this error, e.g. from interned ids
    /// back to the strings they stand for.
    pub fn map_code<D>(self, mut f: impl FnMut(C) -> D) -> Error<D> {
        match self {
            Self::SelfDependency(code) => Error::SelfDependency(f(code)),
            Self::UnknownDependency { job, dependency } => Error::UnknownDependency {
                job: f(job),
                dependency: f(dependency),
            },
            Self::CircularDependency(code) => Error::CircularDependency(f(code)),
            Self::DuplicateJob(code) => Error::DuplicateJob(f(code)),
        }
    }
}
