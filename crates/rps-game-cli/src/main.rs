//! Interactive console shell for the commit-reveal game.
//!
//! Thin by design: every decision lives in rps-game-core. This binary
//! parses the move list, renders menus and tables, and loops on stdin.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rps_game_core::{GameError, MoveSet, Outcome, Resolution, Round};
use std::io::{self, BufRead, Write};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "rps-game")]
#[command(about = "Generalized rock-paper-scissors with a verifiable computer commitment")]
#[command(version)]
struct Cli {
    /// Move names in cyclic order: an odd count (>= 3) of unique names,
    /// e.g. rock paper scissors
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();
    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    info!(move_count = moves.len(), "move set accepted");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'game: loop {
        let mut round = Round::new(&moves)?;
        print_menu(&round);

        loop {
            let Some(input) = prompt(&mut lines, "Enter your move: ")? else {
                break 'game;
            };

            match input.as_str() {
                "0" => break 'game,
                "?" => {
                    print_help(&round);
                    if prompt(&mut lines, "Press any key to continue...")?.is_none() {
                        break 'game;
                    }
                    print_menu(&round);
                }
                other => {
                    let Ok(choice) = other.parse::<usize>() else {
                        println!("Invalid input. Please choose a valid move or enter '?' for help.");
                        continue;
                    };
                    match round.submit_move(choice) {
                        Ok(resolution) => {
                            print_resolution(&resolution);
                            match prompt(&mut lines, "Do you want to play again? (y/n): ")? {
                                Some(answer) if answer == "y" => continue 'game,
                                _ => break 'game,
                            }
                        }
                        Err(GameError::InvalidChoice { .. }) => {
                            println!(
                                "Invalid input. Please choose a valid move or enter '?' for help."
                            );
                        }
                        // Anything else out of a committed round is a defect
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Read one trimmed line from stdin; `None` means end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_menu(round: &Round<'_>) {
    println!("HMAC: {}", round.commitment());
    println!("Available moves:");
    for (i, name) in round.move_names().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - exit");
    println!("? - help");
}

/// Outcome table: rows are the player's move, columns the computer's
fn print_help(round: &Round<'_>) {
    let names = round.move_names();
    let matrix = round.outcome_matrix();
    let header = "v you \\ pc >";
    let width = names
        .iter()
        .map(|name| name.len())
        .chain([header.len(), "DRAW".len()])
        .max()
        .unwrap_or(0)
        + 2;

    print!("{:width$}", header, width = width);
    for name in names {
        print!("{:width$}", name, width = width);
    }
    println!();

    for player in names {
        print!("{:width$}", player, width = width);
        for computer in names {
            let outcome = matrix[&(player.clone(), computer.clone())];
            print!("{:width$}", outcome.as_str(), width = width);
        }
        println!();
    }
}

fn print_resolution(resolution: &Resolution) {
    println!("Your move: {}", resolution.player_move);
    println!("Computer move: {}", resolution.computer_move);
    let verdict = match resolution.outcome {
        Outcome::Win => "You win!".green(),
        Outcome::Lose => "You lose!".red(),
        Outcome::Draw => "It's a draw!".yellow(),
    };
    println!("{}", verdict);
    println!("HMAC key: {}", resolution.revealed_key);
}
