// Sat Oct 17 2026 - Alex

use crate::node::NodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Layout error: {0}")]
    Node(#[from] NodeError),
    #[error("Probe for '{container}' reported alignments {found:?}, expected {expected:?}")]
    InconsistentAlignments {
        container: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("Platform model has no alignment classes")]
    NoAlignments,
}
