//! Markdown rendering: one table per patient.

use crate::inference::TestCandidate;
use crate::runner::BatchReport;
use dx_math::format_probability;
use std::io::{self, Write};

pub fn write_markdown<W: Write>(report: &BatchReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "# Diagnostic inference report")?;
    writeln!(out)?;
    if let Some(input) = &report.input {
        writeln!(out, "- Input: `{}`", input)?;
    }
    writeln!(out, "- Run: `{}`", report.run_id)?;
    writeln!(out, "- Generated: {}", report.generated_at.to_rfc3339())?;
    writeln!(
        out,
        "- Diseases: {}, patients: {}",
        report.disease_count, report.patient_count
    )?;

    for patient in &report.patients {
        writeln!(out)?;
        writeln!(out, "## Patient {}", patient.id)?;
        writeln!(out)?;
        writeln!(
            out,
            "| Disease | Posterior | Min | Max | Raises most | Lowers most |"
        )?;
        writeln!(out, "|---|---:|---:|---:|---|---|")?;
        for d in &patient.diseases {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                escape(&d.name),
                format_probability(d.posterior),
                format_probability(d.bounds.min),
                format_probability(d.bounds.max),
                cell(d.best_tests.max.as_ref()),
                cell(d.best_tests.min.as_ref()),
            )?;
        }
    }
    Ok(())
}

fn cell(candidate: Option<&TestCandidate>) -> String {
    match candidate {
        Some(c) => format!(
            "{} = {} ({})",
            escape(&c.finding),
            c.outcome,
            format_probability(c.posterior)
        ),
        None => "none".to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
