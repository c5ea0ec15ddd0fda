//! Interactive terminal game
//!
//! Runs full games against a locally-wired service: random (or fixed)
//! secret, dictionary-checked guesses, colored tile rows, and session
//! statistics across consecutive games.

use crate::core::Word;
use crate::game::{MAX_GUESSES, SharedStatistics};
use crate::output::{print_game_summary, print_guess_row, print_statistics};
use crate::service::{
    GameRef, GameService, InMemoryGameStore, MaskedCodec, RandomSecretSelector, ServiceError,
    WordListDictionary,
};
use std::io::{self, Write};

type PlayService =
    GameService<WordListDictionary, InMemoryGameStore, MaskedCodec, RandomSecretSelector>;

/// Run the interactive game loop
///
/// With `fixed_secret` set, every game uses that word (it must be in the
/// word list); otherwise each game draws a random secret.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the
/// word list is empty or rejects the fixed secret.
pub fn run_play(words: &[Word], fixed_secret: Option<&str>) -> Result<(), String> {
    let selector =
        RandomSecretSelector::new(words.to_vec()).ok_or_else(|| "Word list is empty".to_string())?;
    let service = GameService::new(
        WordListDictionary::new(words),
        InMemoryGameStore::new(),
        MaskedCodec::default(),
        selector,
        SharedStatistics::new(),
    );

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Referee - Play Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret 5-letter word in {MAX_GUESSES} tries.");
    println!("After each guess you'll see one verdict per letter:");
    println!("  🟩 correct position   🟨 in the word, wrong position   ⬜ not in the word\n");
    println!("Type 'quit' to exit.\n");

    loop {
        let game_ref = match fixed_secret {
            Some(secret) => service.create_game(secret).map_err(|e| e.to_string())?,
            None => service.start_game(),
        };

        if !play_one_game(&service, &game_ref)? {
            return Ok(());
        }

        print_statistics(&service.statistics());

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play a single game to completion
///
/// Returns `Ok(false)` if the player quit mid-game.
fn play_one_game(service: &PlayService, game_ref: &GameRef) -> Result<bool, String> {
    loop {
        let game = service.game(game_ref).map_err(|e| e.to_string())?;
        let turn = game.guesses().len() + 1;

        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(false);
        }

        match service.submit_guess(game_ref, &input) {
            Ok(outcome) => {
                let game = service.game(game_ref).map_err(|e| e.to_string())?;
                print_guess_row(outcome.guess_count, &game);
                println!();

                if outcome.is_completed {
                    print_game_summary(&game);
                    return Ok(true);
                }
            }
            Err(ServiceError::UnknownWord(text)) => {
                println!("  ❌ '{text}' is not a playable word\n");
            }
            Err(ServiceError::Game(err)) => {
                println!("  ❌ {err}\n");
            }
            Err(err) => return Err(err.to_string()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
