// Sat Oct 17 2026 - Alex

use crate::config::{Config, OutputFormat};
use crate::output::Indent;
use crate::ui::cli::CliError;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Report(Config),
    Help,
    Version,
}

/// Resolves the run mode from the arguments following the program name.
///
/// The first token selects the mode. Only `--code` looks at the tokens after
/// it: `-t` takes a single decimal digit, the first other token names the
/// output file, and anything after that is rejected.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();

    let Some(mode) = args.first() else {
        return Ok(Invocation::Report(Config::new()));
    };

    let invocation = match mode.to_str() {
        Some("--simple") => Invocation::Report(Config::new()),
        Some("--verbose") => Invocation::Report(Config::new().with_format(OutputFormat::Verbose)),
        Some("--code") => return parse_code_options(&args[1..]).map(Invocation::Report),
        Some("--help") => Invocation::Help,
        Some("--version") => Invocation::Version,
        _ => return Err(CliError::InvalidOption(mode.to_string_lossy().into_owned())),
    };

    if args.len() > 1 {
        log::warn!("Ignoring {} argument(s) after {}", args.len() - 1, mode.to_string_lossy());
    }
    Ok(invocation)
}

fn parse_code_options(args: &[OsString]) -> Result<Config, CliError> {
    let mut config = Config::new().with_format(OutputFormat::Code);

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token.as_os_str() == "-t" {
            let indent = tokens
                .next()
                .and_then(|value| parse_digit(value))
                .ok_or_else(|| CliError::invalid_argument("-t"))?;
            config = config.with_indent(indent);
        } else if config.output_file.is_none() {
            // opened by the handler once every token checks out, so a bad path
            // followed by an extra token reports '--code' rather than 'outputfile'
            config = config.with_output_file(PathBuf::from(token));
        } else {
            return Err(CliError::invalid_argument("--code"));
        }
    }

    Ok(config)
}

fn parse_digit(value: &OsStr) -> Option<Indent> {
    match value.to_str()?.as_bytes() {
        [digit] if digit.is_ascii_digit() => Indent::new(digit - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, CliError> {
        parse_args(args)
    }

    fn code_config(args: &[&str]) -> Config {
        match parse(args).unwrap() {
            Invocation::Report(config) => config,
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_no_arguments_is_simple() {
        assert_eq!(parse(&[]).unwrap(), Invocation::Report(Config::new()));
        assert_eq!(parse(&["--simple"]).unwrap(), parse(&[]).unwrap());
    }

    #[test]
    fn test_modes() {
        assert_eq!(code_config(&["--verbose"]).format, OutputFormat::Verbose);
        assert_eq!(parse(&["--help"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidOption(ref token) if token == "--bogus"));
        assert!(err.to_string().contains("'bogus'"));
        assert!(matches!(parse(&["-t"]), Err(CliError::InvalidOption(_))));
    }

    #[test]
    fn test_code_defaults() {
        let config = code_config(&["--code"]);
        assert_eq!(config.format, OutputFormat::Code);
        assert_eq!(config.indent, Indent::default());
        assert!(config.output_file.is_none());
    }

    #[test]
    fn test_code_tab_width_and_file() {
        let config = code_config(&["--code", "-t", "3", "out.txt"]);
        assert_eq!(config.indent.width(), 3);
        assert_eq!(config.output_file, Some(PathBuf::from("out.txt")));

        let config = code_config(&["--code", "out.txt", "-t", "0"]);
        assert_eq!(config.indent, Indent::tab());
        assert_eq!(config.output_file, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_last_tab_width_wins() {
        assert_eq!(code_config(&["--code", "-t", "2", "-t", "7"]).indent.width(), 7);
    }

    #[test]
    fn test_bad_tab_width() {
        for args in [
            &["--code", "-t"][..],
            &["--code", "-t", "ab"][..],
            &["--code", "-t", "12"][..],
            &["--code", "-t", "x"][..],
            &["--code", "-t", ""][..],
        ] {
            let err = parse(args).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidArgument { option: "-t", .. }),
                "{:?}",
                args
            );
        }
    }

    #[test]
    fn test_extra_token_after_file() {
        let err = parse(&["--code", "a.txt", "b.txt"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { option: "--code", .. }));
    }

    #[test]
    fn test_bad_path_then_extra_token_reports_code() {
        let err = parse(&["--code", "/no/such/dir/out.hpp", "extra"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { option: "--code", source: None }));
    }

    #[test]
    fn test_dash_token_is_a_file_name() {
        let config = code_config(&["--code", "-x"]);
        assert_eq!(config.output_file, Some(PathBuf::from("-x")));
    }
}
