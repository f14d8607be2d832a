// Sat Oct 17 2026 - Alex

use std::io;
use thiserror::Error;

/// Malformed command lines. Both kinds end the run with exit code 2.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid option -- '{}'", .0.trim_start_matches('-'))]
    InvalidOption(String),
    #[error("invalid argument for option -- '{option}'")]
    InvalidArgument {
        option: &'static str,
        #[source]
        source: Option<io::Error>,
    },
}

impl CliError {
    pub const EXIT_CODE: u8 = 2;

    pub fn invalid_argument(option: &'static str) -> Self {
        CliError::InvalidArgument { option, source: None }
    }

    pub fn output_file(source: io::Error) -> Self {
        CliError::InvalidArgument {
            option: "outputfile",
            source: Some(source),
        }
    }

    pub fn exit_code(&self) -> u8 {
        Self::EXIT_CODE
    }
}
