// Sat Oct 17 2026 - Alex

pub mod cli;
pub mod errors;

pub use cli::{CliError, CommandHandler, Invocation};
pub use errors::ErrorDisplay;
