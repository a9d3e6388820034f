use crate::Error;

/// A named unit of work with at most one dependency.
///
/// The dependency is held by code only; the [`JobCollection`](crate::JobCollection)
/// that owns this job resolves it to the actual job when it is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<C> {
    code: C,
    dependency: Option<C>,
}

impl<C: PartialEq> Job<C> {
    /// Create a job with no dependency.
    pub fn new(code: C) -> Self {
        Self {
            code,
            dependency: None,
        }
    }

    /// Create a job that depends on `dependency`.
    pub fn with_dependency(code: C, dependency: C) -> Result<Self, Error<C>> {
        let mut job = Self::new(code);
        job.set_dependency(dependency)?;
        Ok(job)
    }

    /// Replace this job's dependency. Fails if it names the job itself.
    pub fn set_dependency(&mut self, dependency: C) -> Result<(), Error<C>> {
        if dependency == self.code {
            return Err(Error::SelfDependency(dependency));
        }
        self.dependency = Some(dependency);
        Ok(())
    }
}

impl<C> Job<C> {
    #[inline]
    pub fn code(&self) -> &C {
        &self.code
    }

    #[inline]
    pub fn dependency(&self) -> Option<&C> {
        self.dependency.as_ref()
    }
}

impl<C: PartialEq> TryFrom<(C, Option<C>)> for Job<C> {
    type Error = Error<C>;

    fn try_from((code, dependency): (C, Option<C>)) -> Result<Self, Self::Error> {
        match dependency {
            Some(dependency) => Self::with_dependency(code, dependency),
            None => Ok(Self::new(code)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let job = Job::new('a');
        assert_eq!('a', *job.code());
        assert_eq!(None, job.dependency());
    }

    #[test]
    fn test_with_dependency() -> Result<(), Error<char>> {
        let job = Job::with_dependency('a', 'b')?;
        assert_eq!('a', *job.code());
        assert_eq!(Some(&'b'), job.dependency());
        Ok(())
    }

    #[test]
    fn test_construct_self_dependency_fails() {
        assert_eq!(
            Err(Error::SelfDependency("a")),
            Job::with_dependency("a", "a"),
        );
    }

    #[test]
    fn test_set_self_dependency_fails() {
        let mut job = Job::new(String::from("build"));
        assert_eq!(
            Err(Error::SelfDependency(String::from("build"))),
            job.set_dependency(String::from("build")),
        );
        assert_eq!(None, job.dependency());
    }

    #[test]
    fn test_set_dependency_overwrites() -> Result<(), Error<&'static str>> {
        let mut job = Job::with_dependency("a", "b")?;
        job.set_dependency("c")?;
        assert_eq!(Some(&"c"), job.dependency());
        Ok(())
    }

    #[test]
    fn test_from_pair() -> Result<(), Error<&'static str>> {
        let job = Job::try_from(("a", Some("b")))?;
        assert_eq!(Some(&"b"), job.dependency());
        let job = Job::try_from(("a", None))?;
        assert_eq!(None, job.dependency());
        assert!(Job::try_from(("a", Some("a"))).is_err());
        Ok(())
    }
}
