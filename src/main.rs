//! Numberle - CLI
//!
//! Guess the hidden arithmetic equation in six attempts, with colored
//! per-character feedback after every guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use numberle::{
    commands::{check_equation, run_play},
    core::Equation,
    equations::{
        EQUATIONS,
        loader::{equations_from_slice, load_from_file},
    },
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Wordle-style equation guessing game with an arithmetic rules engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus: 'embedded' (default, bundled equations) or path to a file
    #[arg(short = 'c', long, global = true, default_value = "embedded")]
    corpus: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal (default)
    Play,

    /// Validate a candidate equation and show both side values
    Check {
        /// The equation to check, e.g. '6+4=2*5'
        equation: String,
    },
}

/// Load the corpus selected by the -c flag
///
/// 'embedded' uses the bundled list; anything else is treated as a path to a
/// file with one candidate per line.
fn load_corpus(corpus_mode: &str) -> Result<Vec<Equation>> {
    let corpus = match corpus_mode {
        "embedded" => equations_from_slice(EQUATIONS),
        path => load_from_file(path)?,
    };

    if corpus.is_empty() {
        anyhow::bail!("corpus '{corpus_mode}' contains no target-eligible equations");
    }

    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let corpus = load_corpus(&cli.corpus)?;
            run_play(&corpus).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { equation } => {
            print_check_result(&check_equation(&equation));
            Ok(())
        }
    }
}
