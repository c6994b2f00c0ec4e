//! NDJSON output: one JSON object per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
