pub mod convert;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::error::{ConvertError, Result};

use convert::ConvertArgs;

/// gpl2clr - Convert GIMP palettes into macOS colour lists
#[derive(Parser, Debug)]
#[command(name = "gpl2clr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GIMP palette (.gpl) to convert
    #[arg(value_name = "GPL_FILE")]
    pub input: Option<PathBuf>,

    /// Colour list (.clr) to write (default: input with a .clr extension)
    #[arg(value_name = "CLR_FILE")]
    pub output: Option<PathBuf>,

    /// Copy the result into ~/Library/Colors
    #[arg(long)]
    pub install: bool,

    /// Print each conversion step
    #[arg(long)]
    pub verbose: bool,

    /// Parse and report only; write nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    Help,
    Version,
    Convert(ConvertArgs),
}

/// Parse command-line arguments (including the program name).
///
/// `--help` wins over everything else before a `--` separator, including
/// arguments that would otherwise be rejected.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args
        .iter()
        .skip(1)
        .take_while(|a| *a != "--")
        .any(|a| a == "--help" || a == "-h")
    {
        return Ok(Invocation::Help);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return classify(err),
    };

    let input = cli.input.ok_or(ConvertError::MissingInput)?;

    Ok(Invocation::Convert(ConvertArgs {
        input,
        output: cli.output,
        install: cli.install,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    }))
}

/// Usage text shown for `--help` and after argument errors.
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

pub fn version_text() -> String {
    Cli::command().render_version().to_string()
}

fn classify(err: clap::Error) -> Result<Invocation> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(Invocation::Help)
        }
        ErrorKind::DisplayVersion => Ok(Invocation::Version),
        ErrorKind::UnknownArgument => {
            let arg = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => String::new(),
            };
            if arg.starts_with('-') {
                Err(ConvertError::UnrecognizedOption(arg))
            } else {
                Err(ConvertError::UnexpectedArgument(arg))
            }
        }
        kind => Err(ConvertError::Argument(kind.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Invocation> {
        parse_args(std::iter::once("gpl2clr").chain(args.iter().copied()))
    }

    #[test]
    fn test_input_only() {
        let invocation = parse(&["warm.gpl"]).unwrap();
        assert_eq!(
            invocation,
            Invocation::Convert(ConvertArgs {
                input: PathBuf::from("warm.gpl"),
                output: None,
                install: false,
                verbose: false,
                dry_run: false,
            })
        );
    }

    #[test]
    fn test_all_flags() {
        let invocation =
            parse(&["--verbose", "warm.gpl", "out/warm.clr", "--install", "--dry-run"]).unwrap();
        let Invocation::Convert(args) = invocation else {
            panic!("expected a conversion");
        };
        assert_eq!(args.output, Some(PathBuf::from("out/warm.clr")));
        assert!(args.install);
        assert!(args.verbose);
        assert!(args.dry_run);
    }

    #[test]
    fn test_help_alone() {
        assert_eq!(parse(&["--help"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["-h"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_help_beats_other_arguments() {
        assert_eq!(
            parse(&["warm.gpl", "--bogus", "a", "b", "--help"]).unwrap(),
            Invocation::Help
        );
    }

    #[test]
    fn test_help_after_separator_is_a_path() {
        let invocation = parse(&["--", "-h"]).unwrap();
        let Invocation::Convert(args) = invocation else {
            panic!("expected a conversion");
        };
        assert_eq!(args.input, PathBuf::from("-h"));
    }

    #[test]
    fn test_version() {
        assert_eq!(parse(&["--version"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_missing_input() {
        let err = parse(&["--install"]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput));

        let err = parse(&[]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput));
    }

    #[test]
    fn test_unrecognized_option() {
        let err = parse(&["warm.gpl", "--colour"]).unwrap_err();
        match err {
            ConvertError::UnrecognizedOption(opt) => assert_eq!(opt, "--colour"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_third_positional() {
        let err = parse(&["a.gpl", "b.clr", "c.clr"]).unwrap_err();
        match err {
            ConvertError::UnexpectedArgument(arg) => assert_eq!(arg, "c.clr"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_help_text_lists_flags() {
        let help = help_text();
        for flag in ["--install", "--verbose", "--dry-run", "--help", "GPL_FILE"] {
            assert!(help.contains(flag), "help is missing {flag}");
        }
    }
}
