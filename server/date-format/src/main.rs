//! Binary entrypoint: read lines from stdin, write JSON lines to stdout.
//!
//! A line starting with `{` is a FormatRequest; any other line is the raw
//! date text. Output lines are either:
//! - A FormatResponse
//! - An ErrorOutput (bad JSON, or a date rejected in strict mode)
//!
//! Blank lines produce no output. Exit status 2 means a bad
//! DATE_FORMAT_MODE, 1 a stdin or stdout failure.

use date_format::{stream, Config, Formatter};
use log::info;
use std::io::{self, Write};

fn main() {
  pretty_env_logger::init();

  let config = match Config::from_env() {
    Ok(c) => c,
    Err(e) => {
      let _ = writeln!(io::stderr(), "date-format: {}", e);
      std::process::exit(2);
    }
  };
  info!("date-format starting in {:?} mode", config.mode);
  let formatter = Formatter::new(config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let out = io::BufWriter::new(stdout.lock());

  if let Err(e) = stream::run(&formatter, stdin.lock(), out) {
    let _ = writeln!(io::stderr(), "date-format: io error: {}", e);
    std::process::exit(1);
  }
}
