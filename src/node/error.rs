// Sat Oct 17 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(usize),
    #[error("No node sizes reported for container '{0}'")]
    EmptyResult(&'static str),
    #[error("Alignments for container '{container}' are not strictly ascending: {previous} then {next}")]
    UnorderedAlignments {
        container: &'static str,
        previous: usize,
        next: usize,
    },
    #[error("Field '{field}' does not fit into node '{node}'")]
    LayoutOverflow { node: String, field: &'static str },
}
