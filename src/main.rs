//! qfind - search a static collection of exam questions from the terminal
//!
//! Type a query, press Enter, and every question whose text or choices
//! contain it is listed with matches highlighted and correct answers marked.

mod app;
mod card;
mod config;
mod display;
mod error;
mod filter;
mod highlight;
mod input;
mod logger;
mod question;
mod search;
mod style;
mod terminal;
mod viewport;

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{info, warn};

use app::App;
use card::{results_rows, Terms};
use config::Config;
use error::{FinderError, Result};
use filter::filter;
use terminal::Terminal;

/// Dataset file used when no path is configured
const DEFAULT_DATASET: &str = "documents.json";

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    /// Interactive finder, or a single printed search with `query`
    Run {
        dataset: Option<PathBuf>,
        query: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (dataset_arg, query) = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Run { dataset, query } => (dataset, query),
    };

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _log_guard = logger::init(&config.log_dir())?;
    if let Some(e) = config_error {
        warn!(error = %e, "config file ignored");
    }

    let dataset_path = dataset_arg
        .or_else(|| config.dataset.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
    let dataset = question::load_dataset(&dataset_path)?;

    if let Some(query) = query {
        print_results(&dataset, &query, &config);
        return Ok(());
    }

    info!(dataset = %dataset_path.display(), "starting finder");
    let terminal = Terminal::new()?;
    let mut app = App::new(terminal, dataset, config);
    app.run()?;

    Ok(())
}

/// Parse command line arguments (program name excluded)
fn parse_args(args: &[String]) -> Result<Command> {
    let mut dataset = None;
    let mut query = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--query" | "-q" => match iter.next() {
                Some(q) => query = Some(q.clone()),
                None => return Err(FinderError::Message(format!("{} needs a value", arg))),
            },
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(FinderError::Message(format!("Unknown option: {}", arg)));
            }
            _ => {
                if dataset.is_some() {
                    return Err(FinderError::Message(format!("Unexpected argument: {}", arg)));
                }
                dataset = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(Command::Run { dataset, query })
}

/// Print the result cards of one search as plain text
fn print_results(dataset: &[question::QuestionRecord], query: &str, config: &Config) {
    for line in result_lines(dataset, query, config) {
        println!("{}", line);
    }
}

/// Result cards of one search, one plain text line per row
fn result_lines(dataset: &[question::QuestionRecord], query: &str, config: &Config) -> Vec<String> {
    let found = filter(dataset, query, config.empty_query);
    info!(query, results = found.len(), "printed search");

    let terms = Terms {
        question: query,
        choices: query,
    };
    results_rows(found, terms, None).iter().map(|row| row.plain_text()).collect()
}

fn print_usage() {
    println!("qfind {} - exam question finder", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: qfind [OPTIONS] [DATASET]");
    println!();
    println!("DATASET defaults to the `dataset` config entry, then ./{}", DEFAULT_DATASET);
    println!();
    println!("Options:");
    println!("  -q, --query TEXT  Print the results for TEXT and exit");
    println!("  -h, --help        Show this help message");
    println!("  -V, --version     Show version information");
    println!();
    println!("Keys:");
    println!("  Enter             Search");
    println!("  Esc, C-u          Clear the search field");
    println!("  Left, Right       Move in the search field (C-a / C-e: start / end)");
    println!("  Up, Down          Scroll results");
    println!("  PageUp, PageDown  Scroll results one page");
    println!("  Home, C-t         Back to top");
    println!("  C-l               Redraw screen");
    println!("  C-q, C-c          Quit");
    println!();
    if let Some(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn print_version() {
    println!("qfind {}", env!("CARGO_PKG_VERSION"));
}
