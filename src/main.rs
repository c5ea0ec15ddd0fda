//! Wordle Referee - CLI
//!
//! Plays, simulates, and inspects server-authoritative Wordle games against
//! an in-process game service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_referee::{
    commands::{run_play, run_simulation},
    core::{GuessResult, Word},
    output::{colorize_guess, print_simulation_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_referee",
    about = "Server-authoritative Wordle game engine: play, simulate, and score guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game in the terminal (default)
    Play {
        /// Fix the secret instead of drawing a random one
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Play many games in parallel and report aggregate statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Score a single guess against a secret
    Eval {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            run_play(&words, secret.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Simulate { count } => run_simulate_command(&words, count),
        Commands::Eval { guess, secret } => run_eval_command(&guess, &secret),
    }
}

fn run_simulate_command(words: &[Word], count: usize) -> Result<()> {
    println!("Simulating {count} games...");

    let result = run_simulation(words, count).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result);

    Ok(())
}

fn run_eval_command(guess_text: &str, secret_text: &str) -> Result<()> {
    let guess = Word::new(guess_text).map_err(|e| anyhow::anyhow!("Invalid guess: {e}"))?;
    let secret = Word::new(secret_text).map_err(|e| anyhow::anyhow!("Invalid secret: {e}"))?;

    let result = GuessResult::evaluate(&guess, &secret);

    println!(
        "\n  {}  {}",
        colorize_guess(&guess, result),
        result.to_emoji()
    );
    println!(
        "  {} correct, {} present\n",
        result.count_correct(),
        result.count_present()
    );

    Ok(())
}
