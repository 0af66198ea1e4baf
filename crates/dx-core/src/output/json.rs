//! JSON rendering of the batch report.

use crate::runner::BatchReport;
use std::io::Write;

pub fn write_json<W: Write>(report: &BatchReport, out: &mut W) -> dx_common::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
