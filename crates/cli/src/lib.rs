//! Setup shared by the `notes-export` and `notes-view` binaries.

use clap::error::ErrorKind;
use clap::Parser;

/// Exit status for a missing or malformed command line.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Parse command line arguments.
///
/// Usage errors, such as a missing notes path, print clap's diagnostic to
/// standard error and exit with [`USAGE_EXIT_CODE`]. `--help` and
/// `--version` exit successfully.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|e| {
        let code = exit_code(&e);
        let _ = e.print();
        std::process::exit(code)
    })
}

/// Exit status for a clap parse outcome.
fn exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}

/// Initialize logging to standard error.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
