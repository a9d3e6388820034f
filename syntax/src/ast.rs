/// One `job => dependency` entry of a job list, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDecl<'a> {
    /// code of the job being declared
    pub job: &'a str,
    /// code of the job it depends on, if any
    pub dependency: Option<&'a str>,
}

// These methods are just to assist with writing more legible tests.
#[cfg(test)]
impl<'a> JobDecl<'a> {
    pub fn job(job: &'a str) -> Self {
        Self {
            job,
            dependency: None,
        }
    }
    pub fn depends(job: &'a str, dependency: &'a str) -> Self {
        Self {
            job,
            dependency: Some(dependency),
        }
    }
}
