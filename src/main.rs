use clap::Parser;

use prompt_calc::{logging, run};

/// Reads two numbers and an operator from stdin and prints one result.
#[derive(Parser, Debug)]
#[command(name = "prompt-calc", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    match run() {
        Ok(outcome) => tracing::debug!(?outcome, "session finished"),
        Err(e) => {
            tracing::debug!(error = ?e, "session failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
