// Sat Oct 17 2026 - Alex

//! Reports the per-node bookkeeping overhead ("base node size") of the
//! standard sequence and associative containers for every alignment class,
//! as plain text, verbose text, or generated C++ traits.

pub mod config;
pub mod node;
pub mod orchestrator;
pub mod output;
pub mod probe;
pub mod ui;
pub mod utils;

pub use config::{Config, OutputFormat};
pub use node::{Alignment, ContainerKind, DebugResult, NodeSizeEntry, REGISTRY};
pub use orchestrator::{ReportRunner, RunError};
pub use output::{NodeSizeSerializer, Serializer};
pub use probe::{LayoutProbe, NodeSizeProbe, ProbeError};
pub use ui::cli::CommandHandler;
