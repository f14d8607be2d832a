// Sat Oct 17 2026 - Alex

use crate::output::Indent;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Verbose,
    Code,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Verbose => "verbose",
            OutputFormat::Code => "code",
        };
        f.write_str(name)
    }
}

/// Resolved settings for one reporting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub indent: Indent,
    /// Standard output when unset.
    pub output_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Simple,
            indent: Indent::default(),
            output_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.output_file.is_some() && self.format != OutputFormat::Code {
            return Err(format!("an output file is only supported for code output, not {}", self.format));
        }
        if self.indent != Indent::default() && self.format != OutputFormat::Code {
            return Err(format!("indentation is only configurable for code output, not {}", self.format));
        }
        Ok(())
    }
}
