//! Command-line surface of the `dx` binary.
//!
//! ```text
//! dx -i <input.txt> [--output <path>] [--format legacy|json|md] [--stdout]
//! dx check -i <input.txt>
//! ```
//!
//! Global flags (`--config`, `-v`, `-q`, `--log-format`) apply to both forms.

use crate::exit_codes::ExitCode;
use crate::input::{parse_file, Dataset};
use crate::log_event;
use crate::logging::{
    event_names, generate_run_id, init_logging, level_from_verbosity, LogConfig, LogContext,
    LogFormat, Stage,
};
use crate::output::{write_report, write_report_file};
use crate::paths::{derive_output_path, validate_input_path};
use crate::runner::run_batch;
use clap::{Args, Parser, Subcommand};
use dx_common::{Error, OutputFormat, Result, StructuredError};
use dx_config::{resolve_settings, ResolvedSettings};
use std::path::{Path, PathBuf};

/// Naive-Bayes diagnostic inference over partially observed symptoms
#[derive(Parser, Debug)]
#[command(name = "dx")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug, Default)]
pub struct GlobalOpts {
    /// Settings file (overrides DX_CONFIG and the XDG location)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log output format on stderr (human, jsonl)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

/// Options of the default (report) command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Input record file, must be named *.txt
    #[arg(short, long, value_name = "INPUT.txt")]
    pub input: Option<PathBuf>,

    /// Report path (default: <stem>_inference.<ext> in the working directory)
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Report format (default from settings, otherwise legacy)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate an input file without running inference
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input record file, must be named *.txt
    #[arg(short, long, value_name = "INPUT.txt")]
    pub input: PathBuf,
}

/// Run the parsed command line and return the process exit code.
pub fn execute(cli: &Cli) -> ExitCode {
    let resolved = resolve_settings(cli.global.config.as_deref());

    let log_settings = resolved
        .as_ref()
        .map(|r| r.settings.log.clone())
        .unwrap_or_default();
    let log_config = LogConfig::from_env(
        &log_settings,
        level_from_verbosity(cli.global.verbose, cli.global.quiet),
        cli.global.log_format,
    );
    if let Err(err) = init_logging(&log_config) {
        eprintln!("warning: logging not initialized: {err}");
    }

    let result = resolved
        .map_err(Error::from)
        .and_then(|resolved| dispatch(cli, &resolved));

    match result {
        Ok(code) => code,
        Err(err) => {
            report_error(&err, log_config.format);
            ExitCode::from(&err)
        }
    }
}

fn dispatch(cli: &Cli, resolved: &ResolvedSettings) -> Result<ExitCode> {
    let run_id = generate_run_id();
    let ctx = LogContext::new(run_id.to_string());
    log_event!(
        ctx,
        DEBUG,
        event_names::CONFIG_LOADED,
        Stage::Init,
        "settings resolved",
        source = display(&resolved.source)
    );

    match &cli.command {
        Some(Commands::Check(args)) => run_check(&ctx, &args.input),
        None => run_report(&ctx, run_id, &cli.run, resolved),
    }
}

fn load(ctx: &LogContext, input: &Path) -> Result<Dataset> {
    validate_input_path(input)?;
    let dataset = parse_file(input)?;
    log_event!(
        ctx,
        INFO,
        event_names::PARSE_FINISHED,
        Stage::Parse,
        "input parsed",
        input = display(input.display()),
        diseases = dataset.diseases.len(),
        patients = dataset.patients.len()
    );
    Ok(dataset)
}

fn run_check(ctx: &LogContext, input: &Path) -> Result<ExitCode> {
    let dataset = load(ctx, input)?;
    println!(
        "ok: {} diseases, {} patients, {} unknown symptoms",
        dataset.diseases.len(),
        dataset.patients.len(),
        dataset.unknown_count()
    );
    Ok(ExitCode::Clean)
}

fn run_report(
    ctx: &LogContext,
    run_id: uuid::Uuid,
    args: &RunArgs,
    resolved: &ResolvedSettings,
) -> Result<ExitCode> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| Error::Args("missing required argument -i <INPUT.txt>".to_string()))?;
    let settings = &resolved.settings;
    let format = args.format.unwrap_or(settings.output.format);

    log_event!(
        ctx,
        INFO,
        event_names::RUN_STARTED,
        Stage::Init,
        "starting inference run",
        input = display(input.display()),
        format = display(format)
    );

    let mut dataset = load(ctx, input)?;
    let report = run_batch(&mut dataset, &settings.limits, run_id, Some(input))?;

    if args.stdout {
        let stdout = std::io::stdout();
        write_report(&report, format, &mut stdout.lock())?;
    } else {
        let path = match &args.output {
            Some(path) => path.clone(),
            None => derive_output_path(
                input,
                &settings.output.suffix,
                format,
                settings.output.directory.as_deref(),
            )?,
        };
        write_report_file(&report, format, &path)?;
        log_event!(
            ctx,
            INFO,
            event_names::REPORT_WRITTEN,
            Stage::Report,
            "report written",
            path = display(path.display())
        );
    }

    log_event!(
        ctx,
        INFO,
        event_names::RUN_FINISHED,
        Stage::Report,
        "run finished",
        patients = report.patient_count
    );
    Ok(ExitCode::Clean)
}

/// Print `err` to stderr, as JSON when logs are machine-readable.
fn report_error(err: &Error, format: LogFormat) {
    match format {
        LogFormat::Jsonl => eprintln!("{}", StructuredError::from(err).to_json()),
        LogFormat::Human => eprintln!("{}", err.human_report()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_flags() {
        let cli = Cli::try_parse_from([
            "dx", "-i", "cases.txt", "--format", "json", "--stdout", "-vv",
        ])
        .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.run.input.as_deref(), Some(Path::new("cases.txt")));
        assert_eq!(cli.run.format, Some(OutputFormat::Json));
        assert!(cli.run.stdout);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn parses_check_with_global_flags() {
        let cli = Cli::try_parse_from(["dx", "check", "-i", "cases.txt", "--log-format", "jsonl"])
            .unwrap();
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.input, PathBuf::from("cases.txt")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.global.log_format, Some(LogFormat::Jsonl));
    }

    #[test]
    fn output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["dx", "-i", "a.txt", "-o", "x.txt", "--stdout"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["dx", "-i", "a.txt", "--format", "xml"]).is_err());
    }
}
