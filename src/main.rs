// Sat Oct 17 2026 - Alex

use node_size_debugger::ui::{cli, CliError, ErrorDisplay};
use node_size_debugger::utils::logging;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_logger();

    let display = ErrorDisplay::new().with_color(io::stderr().is_terminal());

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(usage) => {
                display.print_usage_error(usage);
                ExitCode::from(usage.exit_code())
            }
            None => {
                display.print_fatal(&err);
                ExitCode::FAILURE
            }
        },
    }
}
