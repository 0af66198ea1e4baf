//! Input file name checks and report path derivation.

use dx_common::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};

const INPUT_EXTENSION: &str = ".txt";

/// Reject input names that are not `*.txt` with a non-empty stem.
pub fn validate_input_path(input: &Path) -> Result<()> {
    let text = input.to_string_lossy();
    if text.chars().count() <= INPUT_EXTENSION.len() || !text.ends_with(INPUT_EXTENSION) {
        return Err(Error::Args(format!(
            "input file name should be in form *.txt (got {:?})",
            text
        )));
    }
    Ok(())
}

/// Report path for `input`: `<stem><suffix>.<ext>`.
///
/// The stem is the file name up to its first `.`, so `runs/a.b.txt` with the
/// default suffix becomes `a_inference.txt`. Without `directory` the report
/// lands in the working directory.
pub fn derive_output_path(
    input: &Path,
    suffix: &str,
    format: OutputFormat,
    directory: Option<&Path>,
) -> Result<PathBuf> {
    validate_input_path(input)?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Args(format!("input path {:?} has no file name", input)))?;
    let stem = file_name.split('.').next().unwrap_or_default();
    let name = format!("{}{}.{}", stem, suffix, format.extension());
    Ok(match directory {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_txt_inputs() {
        assert!(validate_input_path(Path::new("a.txt")).is_ok());
        assert!(validate_input_path(Path::new("data/patients.txt")).is_ok());
    }

    #[test]
    fn rejects_other_names() {
        for bad in [".txt", "txt", "input.csv", "input.TXT", ""] {
            let err = validate_input_path(Path::new(bad)).unwrap_err();
            assert!(matches!(err, Error::Args(_)), "{bad}");
        }
    }

    #[test]
    fn derives_legacy_name_in_working_directory() {
        let out = derive_output_path(
            Path::new("/tmp/runs/sample.txt"),
            "_inference",
            OutputFormat::Legacy,
            None,
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("sample_inference.txt"));
    }

    #[test]
    fn keeps_first_dot_component() {
        let out =
            derive_output_path(Path::new("a.b.txt"), "_inference", OutputFormat::Json, None).unwrap();
        assert_eq!(out, PathBuf::from("a_inference.json"));
    }

    #[test]
    fn honours_directory_and_suffix() {
        let out = derive_output_path(
            Path::new("cases.txt"),
            "_report",
            OutputFormat::Md,
            Some(Path::new("out")),
        )
        .unwrap();
        assert_eq!(out, Path::new("out").join("cases_report.md"));
    }
}
