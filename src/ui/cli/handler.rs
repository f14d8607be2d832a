// Sat Oct 17 2026 - Alex

use crate::config::Config;
use crate::orchestrator::{OutputTarget, ReportRunner, RunSummary};
use crate::output::Serializer;
use crate::probe::{LayoutProbe, NodeSizeProbe};
use crate::ui::cli::args::{parse_args, Invocation};
use crate::ui::cli::help;
use crate::ui::cli::CliError;
use anyhow::Context;
use std::ffi::OsStr;
use std::io::Write;

pub struct CommandHandler<P: NodeSizeProbe = LayoutProbe> {
    probe: P,
}

impl CommandHandler<LayoutProbe> {
    pub fn new() -> Self {
        Self {
            probe: LayoutProbe::host(),
        }
    }
}

impl Default for CommandHandler<LayoutProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NodeSizeProbe> CommandHandler<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Runs the command line `args` (program name excluded). Reports go to
    /// `stdout` unless an output file was given.
    pub fn execute<I, S>(&self, args: I, stdout: &mut dyn Write) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match parse_args(args)? {
            Invocation::Help => {
                stdout.write_all(help::render_help().as_bytes())?;
                stdout.flush()?;
            }
            Invocation::Version => {
                stdout.write_all(help::render_version().as_bytes())?;
                stdout.flush()?;
            }
            Invocation::Report(config) => {
                self.report(&config, stdout)?;
            }
        }
        Ok(())
    }

    pub fn report(&self, config: &Config, stdout: &mut dyn Write) -> anyhow::Result<RunSummary> {
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        log::info!("Reporting node sizes as {} output", config.format);

        let serializer = Serializer::from_config(config);
        let mut target = match &config.output_file {
            Some(path) => {
                let target = OutputTarget::create(path).map_err(CliError::output_file)?;
                log::info!("Writing to {}", path.display());
                target
            }
            None => OutputTarget::stream(stdout),
        };

        let summary = ReportRunner::new(&self.probe)
            .run(&serializer, &mut target)
            .context("failed to report node sizes")?;
        Ok(summary)
    }
}
