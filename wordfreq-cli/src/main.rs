//! `wordfreq` command-line front end.
//!
//! Reads text from `--text`, `--file` or stdin, validates the request the
//! way a service endpoint would, and prints the answer as plain text or JSON.
//!
//! ```bash
//! wordfreq --text "cat bat cat dog bat cat" top 2
//! cat: 3
//! bat: 2
//!
//! cat book.txt | wordfreq --json top 3
//! [{"word":"the","frequency":1204},{"word":"and","frequency":801},{"word":"of","frequency":644}]
//!
//! wordfreq --file book.txt word Whale
//! 1226
//! ```
//!
//! Exit codes: 0 on success, 2 when the request is rejected (blank text or
//! word, bad `n`), 1 on I/O failures. `RUST_LOG=debug` shows how the text
//! was aggregated.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use wordfreq_core::{
    Aggregation, AnalysisRequest, AnalyzerConfig, Answer, FrequencyAnalyzer, RequestError,
};

/// Word frequency statistics over a block of text
#[derive(Parser, Debug)]
#[command(name = "wordfreq", author, version, about, long_about = None)]
struct Args {
    /// Text to analyze (otherwise --file, otherwise stdin)
    #[arg(short, long, global = true, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Aggregation strategy: auto, sequential or parallel
    #[arg(long, global = true, default_value = "auto", value_parser = parse_strategy)]
    strategy: Aggregation,

    /// Input size in bytes at which `auto` switches to parallel aggregation
    #[arg(long, global = true)]
    threshold: Option<usize>,

    /// Number of parallel chunks [default: one per CPU]
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Highest occurrence count of any word
    Highest,
    /// Occurrences of one word (whole word, case-insensitive)
    Word {
        /// The word to count
        word: String,
    },
    /// The N most frequent words, ties broken alphabetically
    Top {
        /// How many words to return
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
}

fn parse_strategy(name: &str) -> Result<Aggregation, String> {
    Aggregation::from_name(name)
        .ok_or_else(|| format!("unknown strategy {name:?} (expected auto, sequential or parallel)"))
}

#[derive(Debug)]
enum Error {
    Request(RequestError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Error {
    fn exit_code(&self) -> u8 {
        match self {
            Error::Request(_) => 2,
            Error::Io(_) | Error::Json(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(e) => write!(f, "invalid input - {}", e),
            Error::Io(e) => write!(f, "failed to read input: {}", e),
            Error::Json(e) => write!(f, "failed to encode result: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::Request(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}", report(&e));
            ExitCode::from(e.exit_code())
        }
    }
}

fn report(e: &Error) -> String {
    format!("Error: {}", e)
}

fn run(args: &Args) -> Result<String, Error> {
    let text = load_text(args)?;

    let text = Some(text.as_str());
    let request = match &args.command {
        Command::Highest => AnalysisRequest::highest_frequency(text),
        Command::Word { word } => AnalysisRequest::frequency_for_word(text, Some(word.as_str())),
        Command::Top { n } => AnalysisRequest::most_frequent_n_words(text, Some(n.as_str())),
    }?;

    let config = analyzer_config(args);
    debug!("{:?} with {:?}", request.query(), config);

    let answer = FrequencyAnalyzer::with_config(config).answer(&request);
    render(&answer, args.json)
}

fn load_text(args: &Args) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        debug!("reading {}", path.display());
        return fs::read_to_string(path);
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn analyzer_config(args: &Args) -> AnalyzerConfig {
    let defaults = AnalyzerConfig::default();
    AnalyzerConfig {
        aggregation: args.strategy,
        parallel_threshold: args.threshold.unwrap_or(defaults.parallel_threshold),
        workers: args.workers.unwrap_or(defaults.workers),
        ..defaults
    }
}

fn render(answer: &Answer, json: bool) -> Result<String, Error> {
    if json {
        Ok(serde_json::to_string(answer)?)
    } else {
        Ok(answer.to_string())
    }
}
