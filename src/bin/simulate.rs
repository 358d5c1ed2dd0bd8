use std::env;
use std::error::Error;
use std::process;

use loveletter::{
    Bot, GameBuilder, PlayerConfig, create_bot_from_spec, describe_move, difficulty_for_spec,
    render_state,
};

const DEFAULT_SEED: u64 = 0xDEA1_ED_1E_77_E4;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut visualize = false;
    let mut seed = DEFAULT_SEED;
    let mut max_turns: Option<usize> = None;
    let mut bot_specs: Vec<String> = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--visualize" => visualize = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--max-turns" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--max-turns requires a value".to_string())?;
                max_turns = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("invalid max-turns value: {value}"))?,
                );
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => bot_specs.push(other.to_string()),
        }
    }

    if bot_specs.is_empty() {
        bot_specs = vec![String::from("human"), String::from("easy")];
    }
    if bot_specs.len() < 2 || bot_specs.len() > 4 {
        return Err(format!(
            "expected between 2 and 4 players, received {}",
            bot_specs.len()
        )
        .into());
    }

    let seats: Vec<PlayerConfig> = bot_specs
        .iter()
        .enumerate()
        .map(|(index, spec)| seat_config(spec, index))
        .collect();
    let num_players = seats.len();
    let mut game = GameBuilder::new(seats)?.with_seed(seed).build()?;

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(num_players);
    for (index, spec) in bot_specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, seed)?);
    }

    println!("Starting Love Letter with {num_players} players.\n");
    let mut turns = 0usize;
    loop {
        if game.is_finished() {
            break;
        }
        if let Some(limit) = max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let current = game.current_player();
        let state = game.state_view(current)?;
        let legal_moves = game.legal_moves(current)?;
        if legal_moves.is_empty() {
            return Err(loveletter::GameError::InvalidConfiguration(
                "no legal moves available for current player",
            )
            .into());
        }
        if visualize {
            println!("{}", render_state(&state));
        }
        let mov = bots[current].select_move(&state, &legal_moves);
        if visualize {
            println!("Chosen move: {}\n", describe_move(&state, &mov));
        }
        let outcome = game.apply_move(current, mov)?;
        for event in &outcome.events {
            println!("{event}");
        }
        for (seat, bot) in bots.iter_mut().enumerate() {
            let view = game.state_view(seat)?;
            bot.observe(&view, &outcome.events);
        }
        turns += 1;
    }

    match game.winners() {
        Some([single]) => println!("\nGame finished. Winner: Player {single}."),
        Some(many) => {
            let ids: Vec<String> = many.iter().map(|id| id.to_string()).collect();
            println!("\nGame finished in a tie between Players {}.", ids.join(", "));
        }
        None => println!("\nSimulation stopped before completion."),
    }

    Ok(())
}

fn seat_config(spec: &str, index: usize) -> PlayerConfig {
    match difficulty_for_spec(spec) {
        Some(difficulty) => {
            PlayerConfig::bot(format!("Bot {index} ({difficulty})"), difficulty)
        }
        None => PlayerConfig::human(format!("Player {index}")),
    }
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS] [SEAT ...]");
    println!("  --visualize           Show the game state and chosen moves each turn");
    println!("  --seed <u64>          Seed for shuffling (default: {DEFAULT_SEED:#x})");
    println!("  --max-turns <usize>   Stop after the specified number of turns");
    println!("  --help                Show this help message");
    println!("Seat entries (2-4 total):");
    println!("  human[:name]          Interactive human-controlled seat");
    println!("  easy[:seed]           Random bot avoiding the Princess");
    println!("  medium[:seed]         Handmaid-preferring cautious bot");
    println!("  hard[:seed]           Card-tracking bot with exact Guard guesses");
    println!("If no seats are provided, defaults to one human and one easy bot.");
}
