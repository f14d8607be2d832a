// Sat Oct 17 2026 - Alex

use crate::ui::cli::CliError;
use colored::Colorize;

/// Formats errors for the error stream, prefixed with the program name.
pub struct ErrorDisplay {
    program: String,
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            program: env!("CARGO_PKG_NAME").to_string(),
            color_enabled: true,
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn without_colors(self) -> Self {
        self.with_color(false)
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    fn program(&self) -> String {
        if self.color_enabled {
            self.program.bold().to_string()
        } else {
            self.program.clone()
        }
    }

    /// Diagnosis plus a pointer to `--help`.
    pub fn format_usage_error(&self, error: &CliError) -> String {
        let message = if self.color_enabled {
            error.to_string().red().to_string()
        } else {
            error.to_string()
        };
        format!(
            "{}: {}\nTry '{} --help' for more information.\n",
            self.program(),
            message,
            self.program
        )
    }

    /// Error with its cause chain on one line.
    pub fn format_fatal(&self, error: &anyhow::Error) -> String {
        let header = if self.color_enabled {
            "error:".red().bold().to_string()
        } else {
            "error:".to_string()
        };
        format!("{}: {} {:#}\n", self.program(), header, error)
    }

    pub fn print_usage_error(&self, error: &CliError) {
        eprint!("{}", self.format_usage_error(error));
    }

    pub fn print_fatal(&self, error: &anyhow::Error) {
        eprint!("{}", self.format_fatal(error));
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
