use std::io::{self, Write};

use crate::action::Move;
use crate::bot::Bot;
use crate::state::GameStateView;
use crate::visualize::{describe_move, render_state};

/// Interactive seat that queries a person via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_move(&mut self, state: &GameStateView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "at least one legal move must exist"
        );
        loop {
            println!(
                "\n=== {}'s turn (player {}) ===",
                self.name, state.self_player
            );
            println!("{}", render_state(state));
            println!("Available moves:");
            for (index, mov) in legal_moves.iter().enumerate() {
                println!("  [{index}] {}", describe_move(state, mov));
            }
            println!("Type the move index, 'help' or 'q' to quit.");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the move you wish to make.");
                println!("The state summary is shown above for reference.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(mov) = legal_moves.get(choice) {
                println!("You selected: {}", describe_move(state, mov));
                return *mov;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }
}
