//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_guess_row, print_simulation_result, print_statistics};
pub use formatters::{colorize_guess, create_progress_bar};
