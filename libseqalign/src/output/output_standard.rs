use crate::align::structs::Alignment;

use anyhow::Result;
use std::io::Write;

pub fn write_standard_output(alignments: &[Alignment], out: &mut impl Write) -> Result<()> {
    for alignment in alignments {
        writeln!(out, "{}", &alignment.ali_string())?
    }
    Ok(())
}

/// Write one JSON object per line, one line per alignment.
pub fn write_json_output(alignments: &[Alignment], out: &mut impl Write) -> Result<()> {
    for alignment in alignments {
        serde_json::to_writer(&mut *out, alignment)?;
        writeln!(out)?;
    }
    Ok(())
}
