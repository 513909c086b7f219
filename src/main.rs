use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser, ValueEnum};
use tf_similarity::{
    calculate_similarity_with, read_text, write_text, CompareOptions, Language, SimilarityError,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tf-similarity", version, about = "Compare two documents by term-frequency cosine similarity")]
struct Cli {
    /// original document
    original_path: PathBuf,
    /// document checked against the original
    compared_path: PathBuf,
    /// file receiving `Similarity: NN.NN%`
    output_path: PathBuf,

    /// tokenization strategy for both documents
    #[arg(short, long, value_enum, default_value_t = LanguageArg::Auto)]
    language: LanguageArg,

    /// -v info, -vv debug (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LanguageArg {
    /// detect from the original document
    Auto,
    Chinese,
    Other,
}

impl Cli {
    fn options(&self) -> CompareOptions {
        match self.language {
            LanguageArg::Auto => CompareOptions::default(),
            LanguageArg::Chinese => CompareOptions::with_language(Language::Chinese),
            LanguageArg::Other => CompareOptions::with_language(Language::Other),
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(SimilarityError::Usage(usage)) => {
            // usage goes to stdout
            print!("{usage}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("[error] {e}");
            return ExitCode::from(1);
        }
    };

    // level comes from -v only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("tf_similarity={}", cli.log_level())))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Parses the command line.
/// `--help` and `--version` print and exit with 0; any other parse failure
/// becomes `SimilarityError::Usage` carrying the rendered usage text.
fn parse_args<I, T>(args: I) -> Result<Cli, SimilarityError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => SimilarityError::Usage(e.render().to_string()),
    })
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let original = read_text(&cli.original_path).context("failed to read original document")?;
    let compared = read_text(&cli.compared_path).context("failed to read compared document")?;

    let report = calculate_similarity_with(&original, &compared, &cli.options())
        .context("failed to compare documents")?;
    debug!(?report, "comparison finished");

    let line = report.to_output_line();
    write_text(&cli.output_path, &line).context("failed to write result")?;

    info!(
        score = report.score,
        language = %report.language,
        vocabulary = report.vocabulary,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "{line}"
    );
    Ok(())
}
