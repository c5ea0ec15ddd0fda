//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar};
use crate::commands::simulate::SimulationResult;
use crate::game::{Game, MAX_GUESSES, StatisticsSnapshot};
use colored::Colorize;

/// Print one scored guess as a tile row
pub fn print_guess_row(turn: usize, game: &Game) {
    let word = &game.guesses()[turn - 1];
    let result = game.results()[turn - 1];

    println!(
        "  {}. {}  {}",
        turn.to_string().bright_black(),
        colorize_guess(word, result),
        result.to_emoji()
    );
}

/// Print a finished game's summary banner and history
pub fn print_game_summary(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if game.is_victory() {
        let turns = game.guesses().len();
        println!(
            "{}",
            format!(
                " 🎉 Solved in {turns} {}! ",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(" ❌ Out of guesses - the word was {} ", game.secret())
                .bright_red()
                .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  Guess history:");
    for turn in 1..=game.guesses().len() {
        print_guess_row(turn, game);
    }
    println!();
}

/// Print the aggregate statistics with a guess distribution chart
pub fn print_statistics(stats: &StatisticsSnapshot) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "GAME STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Games played:  {}", stats.total_games);
    println!("  Victories:     {}", stats.total_victories);
    println!(
        "  Win rate:      {}",
        format!("{:.2}%", stats.win_rate).bright_yellow()
    );

    if stats.total_games == 0 {
        println!("\n  No completed games yet.\n");
        return;
    }

    let most = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);

    println!("\n  Guess distribution:");
    for count in 1..=MAX_GUESSES {
        let games = stats.guess_distribution.get(&count).copied().unwrap_or(0);
        let bar = create_progress_bar(games as f64, most as f64, 24);
        println!("   {count}: {} {games}", bar.green());
    }
    println!();
}

/// Print a bulk simulation's outcome
pub fn print_simulation_result(result: &SimulationResult) {
    print_statistics(&result.stats);

    println!(
        "  Average guesses: {}",
        format!("{:.2}", result.average_guesses()).bright_yellow()
    );
    println!(
        "  Simulated {} games in {:.2}s\n",
        result.games_played,
        result.duration.as_secs_f64()
    );
}
