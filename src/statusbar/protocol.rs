use std::io::{self, Write};

use super::types::{Header, Segment};

/// Writes the protocol header and opens the endless array of updates.
pub fn write_header<W: Write>(out: &mut W, header: &Header) -> io::Result<()> {
    serde_json::to_writer(&mut *out, header)?;
    out.write_all(b"\n[\n")?;
    out.flush()
}

pub fn write_update<W: Write>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    serde_json::to_writer(&mut *out, segments)?;
    out.write_all(b",\n")?;
    out.flush()
}
