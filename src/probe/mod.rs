// Sat Oct 17 2026 - Alex

pub mod error;
pub mod layout_probe;
pub mod platform;

pub use error::ProbeError;
pub use layout_probe::LayoutProbe;
pub use platform::{platform_alignments, PlatformModel};

use crate::node::{Alignment, ContainerKind, DebugResult};

/// Source of base node sizes. Implementations must be deterministic and report
/// the same alignment classes for every container.
pub trait NodeSizeProbe {
    /// Alignment classes covered by every result, ascending.
    fn alignments(&self) -> &[Alignment];

    fn probe(&self, kind: ContainerKind) -> Result<DebugResult, ProbeError>;

    /// Checks that `result` covers exactly [`NodeSizeProbe::alignments`].
    fn check_alignments(&self, result: &DebugResult) -> Result<(), ProbeError> {
        let expected = self.alignments();
        if result.alignments().eq(expected.iter().copied()) {
            return Ok(());
        }

        Err(ProbeError::InconsistentAlignments {
            container: result.container_name(),
            expected: expected.iter().map(Alignment::as_usize).collect(),
            found: result.alignments().map(|a| a.as_usize()).collect(),
        })
    }
}
