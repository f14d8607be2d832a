// Sat Oct 17 2026 - Alex

pub mod code;
pub mod indent;
pub mod simple;
pub mod verbose;

pub use code::{CodeSerializer, BEGIN_MARKER, END_MARKER};
pub use indent::Indent;
pub use simple::SimpleSerializer;
pub use verbose::VerboseSerializer;

use crate::config::{Config, OutputFormat};
use crate::node::DebugResult;
use std::io::{self, Write};

/// Renders probe results. A pass calls `prefix` once, `emit` once per
/// container in registry order, then `suffix` once.
pub trait NodeSizeSerializer {
    fn prefix(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn emit(&self, out: &mut dyn Write, result: &DebugResult) -> io::Result<()>;

    fn suffix(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Serializer {
    Simple(SimpleSerializer),
    Verbose(VerboseSerializer),
    Code(CodeSerializer),
}

impl Serializer {
    pub fn from_config(config: &Config) -> Self {
        match config.format {
            OutputFormat::Simple => Serializer::Simple(SimpleSerializer),
            OutputFormat::Verbose => Serializer::Verbose(VerboseSerializer),
            OutputFormat::Code => Serializer::Code(CodeSerializer::new(config.indent)),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Serializer::Simple(_) => OutputFormat::Simple,
            Serializer::Verbose(_) => OutputFormat::Verbose,
            Serializer::Code(_) => OutputFormat::Code,
        }
    }

    fn inner(&self) -> &dyn NodeSizeSerializer {
        match self {
            Serializer::Simple(s) => s,
            Serializer::Verbose(s) => s,
            Serializer::Code(s) => s,
        }
    }
}

impl NodeSizeSerializer for Serializer {
    fn prefix(&self, out: &mut dyn Write) -> io::Result<()> {
        self.inner().prefix(out)
    }

    fn emit(&self, out: &mut dyn Write, result: &DebugResult) -> io::Result<()> {
        self.inner().emit(out, result)
    }

    fn suffix(&self, out: &mut dyn Write) -> io::Result<()> {
        self.inner().suffix(out)
    }
}
