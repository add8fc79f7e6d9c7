use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser};
use labadain::{load_corpus, preprocess, write_corpus, LabadainStemmer, Mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Path to input text file
    #[arg(short = 'i', long)]
    input_file: Option<PathBuf>,

    /// Input string
    #[arg(short = 't', long)]
    input_text: Option<String>,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct Output {
    /// Path to the file the stemmed text is appended to
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// Print output to console (default)
    #[arg(long)]
    output_text: bool,
}

/// Labadain stemmer for Tetun.
#[derive(Parser, Debug)]
#[command(name = "labadain", version)]
struct Cli {
    #[command(flatten)]
    input: Input,

    #[command(flatten)]
    output: Output,

    /// Stemming mode: light, moderate or heavy
    #[arg(short, long, default_value = "light")]
    mode: Mode,
}

fn run(args: Cli) -> anyhow::Result<()> {
    let text = match args.input.input_file {
        Some(path) => load_corpus(&path)
            .with_context(|| format!("could not load input file {}", path.display()))?,
        None => args.input.input_text.unwrap_or_default(),
    };

    let stemmer = LabadainStemmer::new(args.mode);
    let stemmed = stemmer.stem(&preprocess(&text));

    match args.output.output_file {
        Some(path) => {
            write_corpus(&path, &stemmed)
                .with_context(|| format!("could not write output file {}", path.display()))?;

            info!(path = %path.display(), mode = %args.mode, "wrote stemmed text");
        }
        None => println!("{}", stemmed),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    run(Cli::parse())
}
