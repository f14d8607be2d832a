// Sat Oct 17 2026 - Alex

use crate::node::{registry, ContainerKind};
use crate::orchestrator::RunError;
use crate::output::{NodeSizeSerializer, Serializer};
use crate::probe::NodeSizeProbe;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub containers: usize,
    pub entries: usize,
}

/// Drives one reporting pass over the registry.
pub struct ReportRunner<'a, P: NodeSizeProbe + ?Sized> {
    probe: &'a P,
    containers: &'a [ContainerKind],
}

impl<'a, P: NodeSizeProbe + ?Sized> ReportRunner<'a, P> {
    pub fn new(probe: &'a P) -> Self {
        Self {
            probe,
            containers: registry(),
        }
    }

    /// Restricts the pass to `containers`, reported in the given order.
    pub fn with_containers(mut self, containers: &'a [ContainerKind]) -> Self {
        self.containers = containers;
        self
    }

    pub fn run(&self, serializer: &Serializer, out: &mut dyn Write) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        serializer.prefix(out)?;
        for &kind in self.containers {
            log::debug!("Probing {}", kind);
            let result = self
                .probe
                .probe(kind)
                .and_then(|result| self.probe.check_alignments(&result).map(|()| result))
                .map_err(|source| RunError::Probe {
                    container: kind.name(),
                    source,
                })?;

            serializer.emit(out, &result)?;
            summary.containers += 1;
            summary.entries += result.len();
        }
        serializer.suffix(out)?;
        out.flush()?;

        log::info!(
            "Reported {} containers ({} entries) as {} output",
            summary.containers,
            summary.entries,
            serializer.format()
        );
        Ok(summary)
    }
}
