use clap::Parser;

const CMD_NAME: &str = "jobsort";

/// How to print the ordered job codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One job code per line
    List,
    /// All job codes on one line, joined by the delimiter
    String,
}

/// Stores our command-line args format.
#[derive(Parser)]
#[command(name = CMD_NAME, version, about = None, long_about = None)]
pub struct Args {
    /// Job list, e.g. "a => b, b => c, c =>"
    #[arg(value_name = "JOBS")]
    pub jobs: Option<String>,

    /// Read the job list from a file ('-' for stdin)
    #[arg(short, long, value_name = "FILE")]
    #[arg(env = "JOBSORT_FILE")]
    pub file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::String)]
    pub output: Format,

    /// Separator between job codes in string output
    #[arg(short, long, value_name = "STR")]
    pub delimiter: Option<String>,

    /// Reject repeated entries for the same job instead of merging them
    #[arg(short, long)]
    pub strict: bool,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
