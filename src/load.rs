use anyhow::Result;

use intern::{GetStr, InternStr, PackedInterner, TypedInterner};
use jobs::{Job, JobCollection};
use syntax::ast::JobDecl;

util::typed_id!(CodeId, u32);

type Codes = TypedInterner<CodeId, PackedInterner<u32>>;

const CODES_CAPACITY: usize = 64;
const CODES_AVG_LEN: usize = 4;

/// Turns job list text into an ordered list of job codes.
pub struct Loader {
    /// interned job codes, so the collection can work on small `Copy` ids
    codes: Codes,
    /// reject repeated entries instead of merging them
    strict: bool,
}

impl Loader {
    pub fn new(strict: bool) -> Self {
        Self {
            codes: TypedInterner::new(PackedInterner::with_capacity_and_avg_len(
                CODES_CAPACITY,
                CODES_AVG_LEN,
            )),
            strict,
        }
    }

    /// Parse `text`, validate its dependencies and return job codes in run order.
    pub fn load(&mut self, text: &str) -> Result<Vec<String>> {
        let decls = syntax::parse(text)?;
        log::debug!("parsed {} job entries", decls.len());

        let mut jobs = self.collect(decls)?;
        jobs.sort().map_err(|e| self.describe(e))?;

        jobs.codes()
            .map(|&code| Ok(self.codes.get(code)?.to_owned()))
            .collect()
    }

    fn collect(&mut self, decls: Vec<JobDecl>) -> Result<JobCollection<CodeId>> {
        let mut jobs = JobCollection::with_capacity(decls.len());
        for decl in decls {
            let code = self.codes.intern(decl.job)?;
            let dependency = match decl.dependency {
                Some(dep) => Some(self.codes.intern(dep)?),
                None => None,
            };

            if !self.strict && self.is_repeat(&jobs, code, dependency) {
                log::debug!("merging repeated entry for job \"{}\"", decl.job);
                continue;
            }

            let job = Job::try_from((code, dependency)).map_err(|e| self.describe(e))?;
            jobs.add_job(job).map_err(|e| self.describe(e))?;
        }
        Ok(jobs)
    }

    /// An entry repeats an earlier one if it names the same job and either
    /// the same dependency or none at all.
    fn is_repeat(
        &self,
        jobs: &JobCollection<CodeId>,
        code: CodeId,
        dependency: Option<CodeId>,
    ) -> bool {
        match jobs.find_job(&code) {
            Some(existing) => dependency.is_none() || existing.dependency() == dependency.as_ref(),
            None => false,
        }
    }

    /// Swap interned ids in `e` for the codes they stand for.
    fn describe(&self, e: jobs::Error<CodeId>) -> anyhow::Error {
        e.map_code(|id| match self.codes.get(id) {
            Ok(code) => code.to_owned(),
            Err(_) => format!("{id:?}"),
        })
        .into()
    }
}

/// Order the jobs in `text`. Missing or empty text is an empty order.
pub fn load(text: Option<&str>) -> Result<Vec<String>> {
    match text {
        Some(text) => Loader::new(false).load(text),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn err_of(text: &str, strict: bool) -> jobs::Error<String> {
        let e = Loader::new(strict).load(text).unwrap_err();
        e.downcast::<jobs::Error<String>>().unwrap()
    }

    #[test]
    fn test_empty() -> Result<()> {
        assert!(load(None)?.is_empty());
        assert!(load(Some(""))?.is_empty());
        assert!(load(Some("\n   \n"))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_linear() -> Result<()> {
        assert_eq!(vec!["c", "b", "a"], load(Some("a => b\nb => c\nc =>"))?);
        Ok(())
    }

    #[test]
    fn test_long_codes() -> Result<()> {
        let order = load(Some("deploy => test, test => build, build =>, lint =>"))?;
        assert_eq!(vec!["build", "test", "deploy", "lint"], order);
        Ok(())
    }

    #[test]
    fn test_self_dependency() {
        assert_eq!(
            jobs::Error::SelfDependency("c".to_owned()),
            err_of("a =>\nb =>\nc => c", false)
        );
    }

    #[test]
    fn test_unknown_dependency() {
        assert_eq!(
            jobs::Error::UnknownDependency {
                job: "a".to_owned(),
                dependency: "g".to_owned()
            },
            err_of("a => g\nb =>\nc =>", false)
        );
    }

    #[test]
    fn test_circular() {
        let e = err_of("a =>\nb => c\nc => f\nd => a\ne =>\nf => b", false);
        assert!(matches!(e, jobs::Error::CircularDependency(_)));
    }

    #[test]
    fn test_repeats_merged() -> Result<()> {
        let order = Loader::new(false).load("a => b, b =>, a => b, a =>")?;
        assert_eq!(vec!["b", "a"], order);
        Ok(())
    }

    #[test]
    fn test_repeats_strict() {
        assert_eq!(
            jobs::Error::DuplicateJob("a".to_owned()),
            err_of("a => b, b =>, a => b", true)
        );
    }

    #[test]
    fn test_conflicting_dependency() {
        assert_eq!(
            jobs::Error::DuplicateJob("a".to_owned()),
            err_of("a => b\nb => c\nc =>\ng =>\na => g", false)
        );
    }

    #[test]
    fn test_syntax_error() {
        let e = Loader::new(false).load("not a valid string").unwrap_err();
        assert!(e.downcast_ref::<syntax::Error>().is_some());
    }
}
