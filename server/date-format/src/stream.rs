//! Line loop shared by the binary: one output JSON line per non-blank input line.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::engine::Formatter;
use crate::error::FormatError;
use crate::types::ErrorOutput;

/// Process `input` line by line, writing a FormatResponse or ErrorOutput
/// for each line to `out`.
///
/// Blank lines produce nothing. Other lines are passed on untrimmed. Read
/// and write errors stop the loop and are returned; output written before
/// the error is flushed first.
pub fn run<R: BufRead, W: Write>(
  formatter: &Formatter,
  input: R,
  mut out: W,
) -> io::Result<()> {
  for line in input.lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        out.flush()?;
        return Err(e);
      }
    };

    if line.trim().is_empty() {
      continue;
    }

    match formatter.process_line(&line) {
      Ok(resp) => serde_json::to_writer(&mut out, &resp)?,
      Err(e) => {
        debug!("line rejected: {}", e);
        serde_json::to_writer(&mut out, &error_output(&e))?;
      }
    }
    writeln!(out)?;
  }

  out.flush()
}

fn error_output(e: &FormatError) -> ErrorOutput {
  match e {
    FormatError::InvalidDate { input, .. } => {
      ErrorOutput::new(e.to_string()).with_input(input.clone())
    }
    _ => ErrorOutput::new(e.to_string()),
  }
}
