// Sat Oct 17 2026 - Alex

use crate::node::DebugResult;
use crate::output::NodeSizeSerializer;
use std::io::{self, Write};

/// One sentence per alignment class.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseSerializer;

impl NodeSizeSerializer for VerboseSerializer {
    fn emit(&self, out: &mut dyn Write, result: &DebugResult) -> io::Result<()> {
        writeln!(out, "For container '{}':", result.container_name())?;
        for entry in result.node_sizes() {
            // minimum width only, wider values are printed in full
            writeln!(
                out,
                "\tWith an alignment of {:>2} is the base node size {:>2}.",
                entry.alignment, entry.base_size
            )?;
        }
        Ok(())
    }
}
