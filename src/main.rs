use gherkin_report::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Process the command line arguments
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
