use std::io::{self, Write};

use serde::Serialize;

/// Write `value` as two-space indented JSON followed by a newline.
pub fn write_pretty(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit_pretty(value: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_pretty(&mut out, value)
}
