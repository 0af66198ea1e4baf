//! Report rendering.
//!
//! All formats render from the same [`BatchReport`]; probabilities are always
//! printed with four fractional digits.

pub mod json;
pub mod legacy;
pub mod markdown;

pub use json::write_json;
pub use legacy::write_legacy;
pub use markdown::write_markdown;

use crate::runner::BatchReport;
use dx_common::{OutputFormat, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `report` in `format` to `out`.
pub fn write_report<W: Write>(report: &BatchReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Legacy => write_legacy(report, out)?,
        OutputFormat::Json => write_json(report, out)?,
        OutputFormat::Md => write_markdown(report, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Render `report` to a string.
pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_report(report, format, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `report` to `path`, creating the parent directory if needed.
pub fn write_report_file(report: &BatchReport, format: OutputFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_report(report, format, &mut out)
}
