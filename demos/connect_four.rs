//! Play Connect Four against the search from the terminal.
//!
//! You are Red and move first; type a column number (0-6) and press enter.
//!
//! ```text
//! cargo run --example connect_four -- --simulations 3000 --seed 7
//! ```

use clap::Parser;
use connect_four_mcts::agent::MctsAgent;
use connect_four_mcts::board::{Board, GameStatus, Player};
use connect_four_mcts::boards::connect_four::ConnectFourBoard;
use connect_four_mcts::config::{DEFAULT_SIMULATIONS, MctsConfig};
use connect_four_mcts::mcts::DEFAULT_EXPLORATION_WEIGHT;
use std::io::{self, BufRead, Write};

/// Connect Four against a Monte Carlo tree search opponent
#[derive(Parser)]
#[command(name = "connect_four")]
#[command(about, long_about = None)]
struct Cli {
    /// Search iterations per computer move
    #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
    simulations: u32,
    /// Exploration weight in the UCT score
    #[arg(long, default_value_t = DEFAULT_EXPLORATION_WEIGHT)]
    exploration: f64,
    /// Fixed seed for a reproducible opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = MctsConfig::new(cli.simulations).with_exploration_weight(cli.exploration);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut agent = MctsAgent::new(config)?;

    println!("Welcome to Connect Four!\n");
    let mut board = ConnectFourBoard::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while board.status() == GameStatus::Ongoing {
        println!("{board}");
        match board.current_player() {
            Player::Red => {
                print!("Enter a column (0-6): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    println!();
                    return Ok(());
                };
                let column = match line?.trim().parse::<usize>() {
                    Ok(column) => column,
                    Err(_) => {
                        println!("Invalid input. Enter a number between 0 and 6.");
                        continue;
                    }
                };
                if let Err(err) = board.make(column) {
                    println!("Illegal move ({err}). Try again.");
                }
            }
            Player::Yellow => {
                let column = agent.choose_move(&board)?;
                println!("Computer chooses column {column}\n");
                board.make(column)?;
            }
        }
    }

    println!("{board}");
    match board.status() {
        GameStatus::RedWin => println!("Red (you) wins!"),
        GameStatus::YellowWin => println!("Yellow (computer) wins!"),
        _ => println!("It's a draw!"),
    }
    Ok(())
}
