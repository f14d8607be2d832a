// Sat Oct 17 2026 - Alex

pub mod args;
pub mod error;
pub mod handler;
pub mod help;

pub use args::{parse_args, Invocation};
pub use error::CliError;
pub use handler::CommandHandler;

use std::io::Write;

/// Runs the process command line against standard output.
pub fn run() -> anyhow::Result<()> {
    let handler = CommandHandler::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    handler.execute(std::env::args_os().skip(1), &mut out)?;
    out.flush()?;
    Ok(())
}
