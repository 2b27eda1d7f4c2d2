//! Word Ladder - CLI
//!
//! Finds every shortest word ladder between two words, lists word
//! neighbourhoods, checks hand-written ladders, and runs batches of queries.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        SolveConfig, analyze_neighbours, parse_pairs, run_batch, solve_ladder, verify_ladder,
    },
    core::WordSet,
    output::{
        print_batch_statistics, print_neighbour_result, print_solve_result, print_verify_result,
    },
    wordlists::{SAMPLE_LEXICON, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Finds every shortest word ladder between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lexicon: 'sample' (default, embedded list) or path to a newline-delimited word file
    #[arg(short, long, global = true, default_value = "sample")]
    lexicon: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every shortest ladder between two words
    Solve {
        /// Start word (need not be in the lexicon)
        from: String,

        /// Goal word
        to: String,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List lexicon words one letter away from a word
    Neighbours {
        /// Word to inspect
        word: String,
    },

    /// Check a ladder and compare it with the shortest ones
    Verify {
        /// Ladder words, start first
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Solve many pairs from a file ('FROM TO' per line) in parallel
    Batch {
        /// File of word pairs
        file: PathBuf,

        /// Limit number of pairs to solve
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the lexicon named by the -l flag
///
/// - "sample": the word list embedded at build time
/// - "<path>": a newline-delimited word list on disk
fn load_lexicon(lexicon_mode: &str) -> Result<WordSet> {
    match lexicon_mode {
        "sample" => Ok(words_from_slice(SAMPLE_LEXICON)),
        path => Ok(load_from_file(path)?),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let lexicon = load_lexicon(&cli.lexicon)?;

    match command {
        Commands::Solve { from, to, stats } => run_solve_command(&from, &to, stats, &lexicon),
        Commands::Neighbours { word } => run_neighbours_command(&word, &lexicon),
        Commands::Verify { words } => run_verify_command(&words, &lexicon),
        Commands::Batch { file, limit } => run_batch_command(&file, limit, &lexicon),
    }
}

fn run_solve_command(from: &str, to: &str, stats: bool, lexicon: &WordSet) -> Result<()> {
    let config = SolveConfig::new(from, to);
    let result = solve_ladder(&config, lexicon)?;

    print_solve_result(&result, stats);
    Ok(())
}

fn run_neighbours_command(word: &str, lexicon: &WordSet) -> Result<()> {
    let result = analyze_neighbours(word, lexicon)?;
    print_neighbour_result(&result);
    Ok(())
}

fn run_verify_command(words: &[String], lexicon: &WordSet) -> Result<()> {
    let result = verify_ladder(words, lexicon)?;
    print_verify_result(&result);
    Ok(())
}

fn run_batch_command(file: &Path, limit: Option<usize>, lexicon: &WordSet) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read pairs file {}", file.display()))?;
    let pairs = parse_pairs(&text)?;

    println!("\n{}", "═".repeat(70));
    println!(" Word Ladder Batch ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSolving {} pairs against {} words",
        limit.map_or(pairs.len(), |n| n.min(pairs.len())),
        lexicon.len()
    );

    let stats = run_batch(&pairs, lexicon, limit);
    print_batch_statistics(&stats);
    Ok(())
}
