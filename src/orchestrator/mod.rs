// Sat Oct 17 2026 - Alex

pub mod error;
pub mod runner;
pub mod target;

pub use error::RunError;
pub use runner::{ReportRunner, RunSummary};
pub use target::OutputTarget;
