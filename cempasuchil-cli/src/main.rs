//! Entry point for the `cempasuchil` binary.
#![forbid(unsafe_code)]

use cempasuchil_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "top-level failures are reported to the terminal"
)]
fn main() {
    match cempasuchil_cli::run() {
        Ok(()) => {}
        // Clap prints help and version to stdout and usage errors to stderr.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("cempasuchil: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
