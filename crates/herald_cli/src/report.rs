//! `herald report`: report a stream of JSON-encoded events.
//!
//! Each non-blank input line holds one serialized event:
//!
//! ```text
//! {"id":1001,"severity":"warning","locations":[{"file":"a.wxs","line":12}],"text":"bad attribute"}
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use herald_diagnostics::{ConsoleReporter, DiagnosticEvent};

use crate::setup::{build_reporter, should_report};
use crate::{GlobalArgs, ReportArgs};

/// Runs the `herald report` command.
///
/// Returns the reporter's exit code: the id of the last error, or 0.
pub fn run(args: &ReportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let mut reporter = build_reporter(global, &cwd, io::stdout())?;

    let count = match args.input.as_deref() {
        None | Some("-") => report_stream(io::stdin().lock(), &mut reporter, global)?,
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("cannot open {path}: {e}"))?;
            report_stream(BufReader::new(file), &mut reporter, global)?
        }
    };

    log::debug!(
        "reported {count} event(s), last error number {}",
        reporter.last_error_number()
    );
    Ok(reporter.exit_code())
}

/// Reports every event in `input`, in order, and returns how many were read.
///
/// Blank lines are skipped. A line that does not decode as an event stops the
/// run with an error naming the line number.
pub fn report_stream<R: BufRead, W: Write>(
    input: R,
    reporter: &mut ConsoleReporter<W>,
    global: &GlobalArgs,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut count = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: DiagnosticEvent =
            serde_json::from_str(&line).map_err(|e| format!("line {}: {e}", index + 1))?;
        count += 1;
        if should_report(&event, global) {
            reporter.report(&event)?;
        } else {
            log::trace!("dropping verbose message {}", event.id);
        }
    }
    Ok(count)
}
