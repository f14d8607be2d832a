// Sat Oct 17 2026 - Alex

use crate::node::DebugResult;
use crate::output::NodeSizeSerializer;
use std::io::{self, Write};

/// `alignment=base-node-size` lines under the container name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSerializer;

impl NodeSizeSerializer for SimpleSerializer {
    fn emit(&self, out: &mut dyn Write, result: &DebugResult) -> io::Result<()> {
        writeln!(out, "{}:", result.container_name())?;
        for entry in result.node_sizes() {
            writeln!(out, "\t{}={}", entry.alignment, entry.base_size)?;
        }
        Ok(())
    }
}
