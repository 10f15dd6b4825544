use std::io::Write;

use log::warn;

/// Writes `line` and a newline, then flushes.
///
/// Failures are logged and dropped: rendering is a side effect and never
/// interrupts the caller.
pub fn write_line<W>(out: &mut W, line: &str)
where
    W: Write + ?Sized,
{
    if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        warn!("Unable to write '{line}': {err}");
    }
}
