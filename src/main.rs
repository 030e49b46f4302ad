use clap::Parser;
use gutenberg_word_frequency::{
    read_book_manifest, run, BoundaryMode, WordFrequencyConfig, DEFAULT_TOP_N,
};
use log::{error, info};
use std::path::PathBuf;

/// Reports the most frequent words of Project Gutenberg books.
#[derive(Parser, Debug)]
#[command(name = "gutenberg-word-frequency", version, about)]
struct Cli {
    /// Book text files to analyze (`.gz` files are decompressed)
    paths: Vec<PathBuf>,

    /// CSV manifest with a `path` column listing additional books
    #[arg(long, short = 'm')]
    manifest: Option<PathBuf>,

    /// Number of top words to report per book
    #[arg(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// How the book body is located: `legacy` or `markers`
    #[arg(long, short = 'b', default_value_t = BoundaryMode::Legacy)]
    boundary: BoundaryMode,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    let mut book_paths = cli.paths;
    if let Some(manifest) = &cli.manifest {
        match read_book_manifest(manifest) {
            Ok(paths) => book_paths.extend(paths),
            Err(e) => {
                error!("Failed to read manifest {}: {}", manifest.display(), e);
                std::process::exit(1);
            }
        }
    }

    if book_paths.is_empty() {
        error!("No books given; pass file paths or --manifest");
        std::process::exit(1);
    }

    let config = WordFrequencyConfig {
        book_paths,
        top_n: cli.top,
        boundary_mode: cli.boundary,
    };
    info!(
        "Analyzing {} book(s) in {} mode",
        config.book_paths.len(),
        config.boundary_mode
    );

    let reports = run(&config);

    for report in &reports {
        match &report.result {
            Ok(summary) => {
                println!("{}", report.path.display());
                println!("Word count: {}", summary.word_count);
                for (rank, word) in summary.top_words.iter().enumerate() {
                    println!("{:>4}. {}", rank + 1, word);
                }
                println!();
            }
            Err(e) => eprintln!("{}: {}", report.path.display(), e),
        }
    }

    if !reports.iter().any(|report| report.is_ok()) {
        std::process::exit(1);
    }
}
