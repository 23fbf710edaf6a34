use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vocab_extract::config::{ExtractConfig, default_base_dir};
use vocab_extract::output::format_vocabulary;
use vocab_extract::report::{ExtractionReport, log_extraction};
use vocab_extract::{Extractor, extract_text};

#[derive(Debug, Parser)]
#[command(name = "vocab-extract")]
#[command(about = "Convert `question - answer (extra)` vocabulary lists to JSON")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Log every parsed line.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the input file and write the JSON mapping (the default).
    Extract(ExtractArgs),
    /// Parse vocabulary text from stdin and print the JSON mapping.
    ParseStdin(ParseArgs),
    /// Parse a vocabulary file and print the JSON mapping without writing it.
    ParseFile(ParseFileArgs),
}

#[derive(Debug, Default, Args)]
struct ExtractArgs {
    /// YAML file with `inputPath`, `outputPath` and `printDuplicates`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Vocabulary text file (default: input.txt).
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON destination (default: output.json).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Directory that relative paths resolve against (default: the
    /// executable's directory).
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Count duplicate keys without logging each one.
    #[arg(long)]
    no_print_duplicates: bool,
    /// Print an extraction report as JSON to stdout.
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Count duplicate keys without logging each one.
    #[arg(long)]
    no_print_duplicates: bool,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to the vocabulary text file.
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    parse: ParseArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => run_extract(ExtractArgs::default()),
        Some(Command::Extract(args)) => run_extract(args),
        Some(Command::ParseStdin(args)) => run_parse_stdin(args),
        Some(Command::ParseFile(args)) => run_parse_file(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run_extract(args: ExtractArgs) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => ExtractConfig::load(path).map_err(|err| err.to_string())?,
        None => ExtractConfig::default(),
    };
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if args.no_print_duplicates {
        config.print_duplicates = false;
    }

    let base_dir = args.base_dir.unwrap_or_else(default_base_dir);
    let extractor = Extractor::from_config(&config, &base_dir);

    let report = extractor
        .save_with_report()
        .ok_or_else(|| "Failed to process file.".to_string())?;
    info!("Everything worked as expected.");

    if args.report {
        print_report(&report)?;
    }
    Ok(())
}

fn run_parse_stdin(args: ParseArgs) -> Result<(), String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    print_parsed(&text, &args)
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let text = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    print_parsed(&text, &args.parse)
}

fn print_parsed(text: &str, args: &ParseArgs) -> Result<(), String> {
    let extraction = extract_text(text);
    log_extraction(&extraction, !args.no_print_duplicates);
    let json = format_vocabulary(&extraction.entries).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_report(report: &ExtractionReport) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|err| format!("Failed to serialize report: {err}"))?;
    println!("{json}");
    Ok(())
}
