// Sat Oct 17 2026 - Alex

use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

const USAGE: &str = "node-size-debugger [--version][--help]
       node-size-debugger [--simple][--verbose]
       node-size-debugger [--code [-t digit] [outputfile]]";

const AFTER_HELP: &str = "\
The base node size is the size of the node without the storage for the value type.
Add 'sizeof(value_type)' to the base node size for the appropriate alignment to get the whole size.
With no options prints base node sizes of all containers in a simple manner.";

/// Describes the command line for help and version output. The mode grammar
/// is positional, so parsing itself is done by `parse_args`.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version)]
#[command(about = "Obtains information about the internal node sizes of the STL containers.", long_about = None)]
#[command(override_usage = USAGE)]
#[command(after_help = AFTER_HELP)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[allow(dead_code)]
struct HelpSurface {
    #[arg(long, help = "prints node sizes in the form 'alignment=base-node-size'")]
    simple: bool,

    #[arg(long, help = "prints node sizes in a more verbose form")]
    verbose: bool,

    #[arg(long, help = "generates C++ code to obtain the node size")]
    code: bool,

    #[arg(long, action = ArgAction::Help, help = "display this help and exit")]
    help: Option<bool>,

    #[arg(long, action = ArgAction::Version, help = "output version information and exit")]
    version: Option<bool>,

    #[arg(
        short = 't',
        value_name = "DIGIT",
        help_heading = "Options for code generation",
        help = "single digit specifying tab width, 0 uses '\\t' (default: 4)"
    )]
    tab_width: Option<u8>,

    #[arg(
        value_name = "OUTPUTFILE",
        help_heading = "Options for code generation",
        help = "file receiving the generated code, created or truncated (default: standard output)"
    )]
    output_file: Option<PathBuf>,
}

pub fn render_help() -> String {
    HelpSurface::command().render_help().to_string()
}

pub fn render_version() -> String {
    HelpSurface::command().render_version()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::parse_args;

    #[test]
    fn test_command_is_well_formed() {
        HelpSurface::command().debug_assert();
    }

    #[test]
    fn test_help_mentions_every_mode() {
        let help = render_help();
        for option in ["--simple", "--verbose", "--code", "-t", "--help", "--version"] {
            assert!(help.contains(option), "missing {} in\n{}", option, help);
        }
        assert!(help.contains("base node size"));
    }

    #[test]
    fn test_no_short_help_or_version() {
        let help = render_help();
        assert!(!help.contains("-h,"));
        assert!(!help.contains("-V,"));
    }

    #[test]
    fn test_every_listed_flag_is_accepted() {
        let help = render_help();
        let flags: Vec<&str> = help
            .split_whitespace()
            .filter(|word| word.starts_with('-'))
            .map(|word| word.trim_end_matches(','))
            .collect();
        assert!(flags.len() >= 6, "{:?}", flags);

        for flag in flags {
            let args: Vec<&str> = if flag == "-t" {
                vec!["--code", "-t", "4"]
            } else {
                vec![flag]
            };
            assert!(parse_args(&args).is_ok(), "{} is listed but rejected", flag);
        }
    }

    #[test]
    fn test_version_text() {
        assert_eq!(
            render_version(),
            format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        );
    }
}
