//! Herald CLI: reports diagnostic events to the console.
//!
//! `herald report` reads a stream of JSON-encoded events and `herald emit`
//! reports a single event described by flags. Both exit with the id of the last
//! error reported, or 0 if there was none. Ids whose low byte is zero exit with
//! 1 so that an error never reads as success.

#![warn(missing_docs)]

mod emit;
mod report;
mod setup;

use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use herald_config::Overrides;
use herald_diagnostics::Severity;

/// Herald: tool-branded console diagnostics.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about = "Console diagnostic reporter")]
pub struct Cli {
    /// Increase log output (`-v` debug, `-vv` trace). `RUST_LOG` overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Drop messages of verbose severity.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a `herald.toml` file. Defaults to the nearest one above the
    /// current directory.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the short tool name prefixed to message ids.
    #[arg(long, global = true)]
    pub short_name: Option<String>,

    /// Override the long tool name used when an event has no location.
    #[arg(long, global = true)]
    pub long_name: Option<String>,

    /// Append a source trace to every message.
    #[arg(long, global = true)]
    pub source_trace: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report events read as JSON lines from a file or stdin.
    Report(ReportArgs),
    /// Report one event described on the command line.
    Emit(EmitArgs),
}

/// Arguments for the `herald report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// File of JSON-encoded events, one per line. Reads stdin if omitted or `-`.
    pub input: Option<String>,
}

/// Arguments for the `herald emit` subcommand.
#[derive(Parser, Debug)]
pub struct EmitArgs {
    /// The resolved message text. `{0}`, `{1}`, ... are filled from `--arg`.
    pub message: String,

    /// Numeric message id.
    #[arg(long)]
    pub id: u32,

    /// Message severity.
    #[arg(short, long, value_enum, default_value_t = SeverityArg::Error)]
    pub severity: SeverityArg,

    /// Source location as `FILE` or `FILE:LINE`. Repeat for a trace chain.
    #[arg(short, long = "location")]
    pub locations: Vec<String>,

    /// Substitution argument for the message text. Repeatable.
    #[arg(long = "arg")]
    pub args: Vec<String>,
}

/// Severity as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Verbose progress output.
    Verbose,
    /// Informational notice.
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Verbose => Severity::Verbose,
            SeverityArg::Info => Severity::Information,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether verbose-severity events are dropped.
    pub quiet: bool,
    /// Optional explicit config file path.
    pub config: Option<String>,
    /// Flag values that override the config file.
    pub overrides: Overrides,
}

impl GlobalArgs {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            config: cli.config.clone(),
            overrides: Overrides {
                short_name: cli.short_name.clone(),
                long_name: cli.long_name.clone(),
                source_trace: cli.source_trace.then_some(true),
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let global = GlobalArgs::from_cli(&cli);

    let result = match cli.command {
        Command::Report(ref args) => report::run(args, &global),
        Command::Emit(ref args) => emit::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(process_status(code)),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Maps the reporter's exit code to the status handed to the OS.
///
/// Unix keeps only the low byte of a status, so an error id that is a multiple
/// of 256 would read as success. Such ids exit with 1 instead; every other code,
/// including 0, is passed through unchanged.
fn process_status(code: i32) -> i32 {
    if code != 0 && code & 0xff == 0 {
        1
    } else {
        code
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_report_default() {
        let cli = Cli::parse_from(["herald", "report"]);
        match cli.command {
            Command::Report(ref args) => assert!(args.input.is_none()),
            _ => panic!("expected Report command"),
        }
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.source_trace);
    }

    #[test]
    fn parse_report_with_file() {
        let cli = Cli::parse_from(["herald", "report", "events.jsonl"]);
        match cli.command {
            Command::Report(ref args) => assert_eq!(args.input.as_deref(), Some("events.jsonl")),
            _ => panic!("expected Report command"),
        }
    }

    #[test]
    fn parse_emit_full() {
        let cli = Cli::parse_from([
            "herald",
            "emit",
            "--id",
            "1001",
            "--severity",
            "warning",
            "-l",
            "a.wxs:12",
            "--location",
            "b.wxi",
            "--arg",
            "x",
            "bad attribute {0}",
        ]);
        match cli.command {
            Command::Emit(ref args) => {
                assert_eq!(args.id, 1001);
                assert_eq!(args.severity, SeverityArg::Warning);
                assert_eq!(args.locations, vec!["a.wxs:12", "b.wxi"]);
                assert_eq!(args.args, vec!["x"]);
                assert_eq!(args.message, "bad attribute {0}");
            }
            _ => panic!("expected Emit command"),
        }
    }

    #[test]
    fn parse_emit_defaults_to_error() {
        let cli = Cli::parse_from(["herald", "emit", "--id", "5", "boom"]);
        match cli.command {
            Command::Emit(ref args) => {
                assert_eq!(args.severity, SeverityArg::Error);
                assert!(args.locations.is_empty());
            }
            _ => panic!("expected Emit command"),
        }
    }

    #[test]
    fn parse_emit_requires_id() {
        assert!(Cli::try_parse_from(["herald", "emit", "boom"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "herald",
            "-vv",
            "--quiet",
            "--source-trace",
            "--short-name",
            "LGHT",
            "--long-name",
            "light.exe",
            "--config",
            "/tmp/herald.toml",
            "report",
        ]);
        assert_eq!(cli.verbose, 2);
        let global = GlobalArgs::from_cli(&cli);
        assert!(global.quiet);
        assert_eq!(global.config.as_deref(), Some("/tmp/herald.toml"));
        assert_eq!(global.overrides.short_name.as_deref(), Some("LGHT"));
        assert_eq!(global.overrides.long_name.as_deref(), Some("light.exe"));
        assert_eq!(global.overrides.source_trace, Some(true));
    }

    #[test]
    fn source_trace_absent_leaves_file_setting() {
        let cli = Cli::parse_from(["herald", "report"]);
        assert_eq!(GlobalArgs::from_cli(&cli).overrides.source_trace, None);
    }

    #[test]
    fn process_status_passes_through_ordinary_codes() {
        assert_eq!(process_status(0), 0);
        assert_eq!(process_status(94), 94);
        assert_eq!(process_status(255), 255);
        assert_eq!(process_status(1001), 1001);
        assert_eq!(process_status(i32::MAX), i32::MAX);
    }

    #[test]
    fn process_status_never_truncates_an_error_to_zero() {
        for code in [256, 512, 1024, 65536, 0x7fff_ff00] {
            assert_eq!(process_status(code), 1, "code {code}");
        }
    }

    #[test]
    fn severity_arg_conversion() {
        assert_eq!(Severity::from(SeverityArg::Verbose), Severity::Verbose);
        assert_eq!(Severity::from(SeverityArg::Info), Severity::Information);
        assert_eq!(Severity::from(SeverityArg::Warning), Severity::Warning);
        assert_eq!(Severity::from(SeverityArg::Error), Severity::Error);
    }
}
