use colored::Colorize;

fn main() {
    if let Err(e) = jobsort::run() {
        eprintln!("{}: {:?}", "ERROR".red(), e);
        std::process::exit(1);
    }
}
