//! `herald emit`: report a single event given on the command line.

use std::io;

use herald_diagnostics::{DiagnosticEvent, SourceLocation};

use crate::setup::{build_reporter, should_report};
use crate::{EmitArgs, GlobalArgs};

/// Runs the `herald emit` command.
pub fn run(args: &EmitArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let mut reporter = build_reporter(global, &cwd, io::stdout())?;

    let event = build_event(args);
    if should_report(&event, global) {
        reporter.report(&event)?;
    }
    Ok(reporter.exit_code())
}

fn build_event(args: &EmitArgs) -> DiagnosticEvent {
    let mut event = DiagnosticEvent::new(args.id, args.severity.into(), args.message.as_str())
        .with_locations(args.locations.iter().map(|l| SourceLocation::parse(l)));
    for arg in &args.args {
        event = event.with_arg(arg.as_str());
    }
    event
}
