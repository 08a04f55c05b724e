//! Command-line interface for the issue-miner binary.
//!
//! Every subcommand prints JSON to stdout so results can be piped into other
//! tooling. Diagnostics go to stderr through `tracing`, filtered by
//! `RUST_LOG`.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use issue_miner::{
    Error, IssueRecord, LabelInput, MiningConfig, commit_messages, elapsed_days_with,
    extract_issue_ids_with, extract_label_value, filter_by_date_range, io_error, load_config,
    load_table, remove_characters, strip_non_numeric,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command line interface for mining issue references and metrics.
#[derive(Debug, Parser,)]
#[command(name = "issue-miner", version, about = "Mine issue ids and metrics from commits")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Path to the YAML mining configuration.
    #[arg(long = "config", value_name = "PATH", env = "ISSUE_MINER_CONFIG", global = true)]
    config: Option<PathBuf,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue, global = true)]
    pretty: bool,
}

#[derive(Debug, Subcommand,)]
enum Command
{
    /// Extract issue ids referenced from commit messages.
    Issues(IssuesArgs,),
    /// Extract the value of a prefixed label.
    Label(LabelArgs,),
    /// Convert the seconds stored in an issue record into working days.
    Elapsed(ElapsedArgs,),
    /// Keep table rows whose date column lies within an inclusive range.
    #[command(name = "filter-dates")]
    FilterDates(FilterDatesArgs,),
    /// Remove the given characters from each value.
    Strip(StripArgs,),
    /// Remove every non-digit character from each value.
    Digits(DigitsArgs,),
}

#[derive(Debug, Args,)]
struct IssuesArgs
{
    /// File holding one commit message per line; stdin when omitted.
    #[arg(long = "input", value_name = "FILE", conflicts_with = "repo")]
    input: Option<PathBuf,>,

    /// Read commit messages from this repository's log instead.
    #[arg(long = "repo", value_name = "DIR")]
    repo: Option<PathBuf,>,

    /// Revision range passed to `git log`.
    #[arg(long = "range", value_name = "REV", requires = "repo")]
    range: Option<String,>,
}

#[derive(Debug, Args,)]
struct LabelArgs
{
    /// Label field as JSON: an array of strings or any other value.
    #[arg(long = "labels", value_name = "JSON")]
    labels: String,

    /// Label prefix to look for; falls back to `label_prefix` from config.
    #[arg(long = "prefix", value_name = "PREFIX")]
    prefix: Option<String,>,
}

#[derive(Debug, Args,)]
struct ElapsedArgs
{
    /// Issue record as a JSON object.
    #[arg(long = "record", value_name = "JSON")]
    record: String,

    /// Key holding elapsed seconds; falls back to `seconds_key` from config.
    #[arg(long = "key", value_name = "KEY")]
    key: Option<String,>,
}

#[derive(Debug, Args,)]
struct FilterDatesArgs
{
    /// JSON file holding an array of row objects.
    #[arg(long = "table", value_name = "FILE")]
    table: PathBuf,

    /// Column holding `YYYY-MM-DD` dates.
    #[arg(long = "column", value_name = "NAME")]
    column: String,

    /// Inclusive lower bound.
    #[arg(long = "start", value_name = "YYYY-MM-DD")]
    start: String,

    /// Inclusive upper bound.
    #[arg(long = "end", value_name = "YYYY-MM-DD")]
    end: String,
}

#[derive(Debug, Args,)]
struct StripArgs
{
    /// Characters to remove, given as one string.
    #[arg(long = "chars", value_name = "CHARS")]
    chars: String,

    /// Values to clean.
    #[arg(value_name = "VALUE")]
    values: Vec<String,>,
}

#[derive(Debug, Args,)]
struct DigitsArgs
{
    /// Values to clean.
    #[arg(value_name = "VALUE")]
    values: Vec<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),
        )
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, input and validation errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(cli, &mut handle,)
}

fn execute<W: io::Write,>(cli: Cli, writer: &mut W,) -> Result<(), Error,>
{
    let config = resolve_config(cli.config.as_deref(),)?;

    match cli.command {
        Command::Issues(args,) => run_issues(args, &config, writer, cli.pretty,),
        Command::Label(args,) => run_label(args, &config, writer, cli.pretty,),
        Command::Elapsed(args,) => run_elapsed(args, &config, writer, cli.pretty,),
        Command::FilterDates(args,) => run_filter_dates(args, writer, cli.pretty,),
        Command::Strip(args,) => {
            let characters: Vec<char,> = args.chars.chars().collect();
            write_json(writer, &remove_characters(&args.values, &characters,), cli.pretty,)
        }
        Command::Digits(args,) => write_json(writer, &strip_non_numeric(&args.values,), cli.pretty,),
    }
}

fn resolve_config(path: Option<&Path,>,) -> Result<MiningConfig, Error,>
{
    match path {
        Some(path,) => load_config(path,),
        None => Ok(MiningConfig::default(),),
    }
}

fn run_issues<W: io::Write,>(
    args: IssuesArgs,
    config: &MiningConfig,
    writer: &mut W,
    pretty: bool,
) -> Result<(), Error,>
{
    let messages = match (&args.repo, &args.input,) {
        (Some(repo,), _,) => commit_messages(repo, args.range.as_deref(),)?,
        (None, Some(path,),) => {
            let contents =
                fs::read_to_string(path,).map_err(|source| io_error(path, source,),)?;
            message_lines(&contents,)
        }
        (None, None,) => {
            let contents = io::read_to_string(io::stdin(),)
                .map_err(|source| io_error(Path::new("<stdin>",), source,),)?;
            message_lines(&contents,)
        }
    };

    debug!("Scanning {} commit messages", messages.len());
    let mut ids = extract_issue_ids_with(&messages, config,);
    ids.sort_by(|left, right| {
        left.len().cmp(&right.len(),).then_with(|| left.cmp(right,),)
    },);

    write_json(writer, &ids, pretty,)
}

fn message_lines(contents: &str,) -> Vec<String,>
{
    contents.lines().map(str::trim,).filter(|line| !line.is_empty(),).map(str::to_owned,).collect()
}

fn run_label<W: io::Write,>(
    args: LabelArgs,
    config: &MiningConfig,
    writer: &mut W,
    pretty: bool,
) -> Result<(), Error,>
{
    let prefix = args
        .prefix
        .as_deref()
        .or(config.label_prefix.as_deref(),)
        .ok_or_else(|| Error::validation("missing required --prefix <PREFIX> argument",),)?;
    let labels: LabelInput = serde_json::from_str(&args.labels,)?;

    write_json(writer, &extract_label_value(&labels, prefix,), pretty,)
}

fn run_elapsed<W: io::Write,>(
    args: ElapsedArgs,
    config: &MiningConfig,
    writer: &mut W,
    pretty: bool,
) -> Result<(), Error,>
{
    let record: IssueRecord = serde_json::from_str(&args.record,)?;
    let key = args.key.as_deref().unwrap_or(config.seconds_key.as_str(),);

    write_json(writer, &elapsed_days_with(&record, key, config,)?, pretty,)
}

fn run_filter_dates<W: io::Write,>(
    args: FilterDatesArgs,
    writer: &mut W,
    pretty: bool,
) -> Result<(), Error,>
{
    let table = load_table(&args.table,)?;
    let filtered = filter_by_date_range(&table, &args.column, &args.start, &args.end,)?;

    write_json(writer, &filtered, pretty,)
}

fn write_json<W: io::Write, T: Serialize + ?Sized,>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, value,)?;
    } else {
        serde_json::to_writer(writer, value,)?;
    }

    Ok((),)
}
