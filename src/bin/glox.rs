//! glox command-line.
//!
//! With one argument it scans that script and prints its tokens. Without
//! arguments it drops into an interactive prompt that scans one line at a time.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use glox::{Diagnostic, Diagnostics, Error, Reporter, Scanner, Token};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "GLOX_LOG";

#[derive(Parser, Debug)]
#[command(name = "glox", version = glox::VERSION, about = "Scan Lox scripts and print their tokens")]
struct Cli {
    /// Script to scan; omit for an interactive prompt
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// How tokens are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `<kind> <literal>` line per token
    Text,
    /// One JSON object per scan holding the tokens and the reported errors
    Json,
}

/// JSON document written for each scan
#[derive(Serialize)]
struct ScanReport<'a> {
    tokens: &'a [Token],
    diagnostics: &'a Diagnostics,
}

/// Keeps a record of each report; in text mode also prints it as it arrives
struct ConsoleReporter {
    diagnostics: Diagnostics,
    echo: bool,
}

impl ConsoleReporter {
    fn new(format: OutputFormat) -> Self {
        ConsoleReporter {
            diagnostics: Diagnostics::new(),
            // JSON mode carries reports inside the document, stdout stays parseable
            echo: format == OutputFormat::Text,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        if self.echo {
            let diagnostic = Diagnostic {
                line,
                message: message.to_string(),
            };
            println!("{}", diagnostic);
        }
        self.diagnostics.report(line, message);
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            use clap::error::ErrorKind;
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            eprintln!("{}", err);
            return ExitCode::from(Error::Usage.exit_code());
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            // Every lexical error has already been written to stdout
            Some(glox_err @ Error::Lexical { .. }) => ExitCode::from(glox_err.exit_code()),
            Some(glox_err) => {
                eprintln!("{}", glox_err);
                ExitCode::from(glox_err.exit_code())
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match cli.scripts.as_slice() {
        [] => run_prompt(cli.format),
        [path] => Ok(run_file(path, cli.format)?),
        _ => Err(Error::Usage.into()),
    }
}

fn run_file(path: &Path, format: OutputFormat) -> glox::Result<()> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = source.len(), "scanning script");

    let mut reporter = ConsoleReporter::new(format);
    scan_and_print(&source, format, &mut reporter)?;

    if reporter.diagnostics.had_error() {
        return Err(Error::Lexical {
            count: reporter.diagnostics.len(),
        });
    }
    Ok(())
}

fn run_prompt(format: OutputFormat) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(format);

    let mut input = String::new();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush().context("failed to flush prompt")?;

        input.clear();
        let nbytes = stdin
            .lock()
            .read_line(&mut input)
            .context("failed to read from stdin")?;
        if nbytes == 0 {
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);
        scan_and_print(line, format, &mut reporter)?;
        reporter.diagnostics.clear();
    }

    Ok(())
}

fn scan_and_print(
    source: &str,
    format: OutputFormat,
    reporter: &mut ConsoleReporter,
) -> glox::Result<()> {
    let tokens = Scanner::new(source).scan_tokens(reporter);

    match format {
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}", render_token(token));
            }
        }
        OutputFormat::Json => {
            let report = ScanReport {
                tokens: &tokens,
                diagnostics: &reporter.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn render_token(token: &Token) -> String {
    match &token.literal {
        Some(literal) => format!("{} {}", token.kind, literal),
        None => format!("{} nil", token.kind),
    }
}
