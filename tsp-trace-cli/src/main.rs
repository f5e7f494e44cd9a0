//! Entry point for the `tsp-trace` command.
#![forbid(unsafe_code)]

use tsp_trace_cli::CliError;

fn main() {
    match tsp_trace_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tsp-trace: {err}");
            std::process::exit(1);
        }
    }
}
