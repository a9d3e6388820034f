use std::path::PathBuf;

use crate::args::{Args, Format};

const STDIN_PATH: &str = "-";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("job list given both as an argument and with --file")]
    ConflictingInputs,
    #[error("job list file does not exist: {0:?}")]
    InputNotFound(PathBuf),
}

/// Where to read the job list from.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// passed directly on the command line
    Text(String),
    File(PathBuf),
    Stdin,
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. defaults are added in.
#[derive(Debug)]
pub struct Settings {
    pub input: Input,
    pub format: Format,
    pub delimiter: String,
    pub strict: bool,
    pub verbose: u8,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input = match (args.jobs, args.file) {
            (Some(_), Some(_)) => return Err(Error::ConflictingInputs.into()),
            (Some(text), None) => Input::Text(text),
            (None, Some(path)) if path != STDIN_PATH => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(Error::InputNotFound(path).into());
                }
                Input::File(path.canonicalize()?)
            }
            (None, _) => Input::Stdin,
        };

        Ok(Self {
            input,
            format: args.output,
            delimiter: args.delimiter.unwrap_or_default(),
            strict: args.strict,
            verbose: args.verbose,
        })
    }
}
