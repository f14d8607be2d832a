// Sat Oct 17 2026 - Alex

use crate::probe::ProbeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Probing '{container}' failed: {source}")]
    Probe {
        container: &'static str,
        #[source]
        source: ProbeError,
    },
    #[error("Writing output failed: {0}")]
    Io(#[from] std::io::Error),
}
