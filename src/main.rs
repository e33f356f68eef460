//! Weiqi-Rust: a 19x19 Go board engine.
//!
//! ## Usage
//!
//! - `weiqi-rust` - Run a random self-play demo
//! - `weiqi-rust demo --moves 80 --save game.goboard` - Demo and save
//! - `weiqi-rust show game.goboard --index 10` - Print a saved position

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use weiqi_rust::board::{format_coord, Color};
use weiqi_rust::constants::SIZE;
use weiqi_rust::engine::Engine;

/// Weiqi-Rust: a 19x19 Go board engine
#[derive(Parser)]
#[command(name = "weiqi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play random legal moves against itself and print the result
    Demo {
        /// Number of moves to attempt
        #[arg(long, default_value_t = 80)]
        moves: usize,
        /// Save the finished game to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Load a saved game and print one of its positions
    Show {
        /// Saved game file
        file: PathBuf,
        /// History index to display (defaults to the last position)
        #[arg(long)]
        index: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { moves, save }) => run_demo(moves, save),
        Some(Commands::Show { file, index }) => show_saved(&file, index),
        None => run_demo(80, None),
    }
}

fn run_demo(moves: usize, save: Option<PathBuf>) -> anyhow::Result<()> {
    println!("Weiqi-Rust: random self-play over {moves} moves\n");

    let mut engine = Engine::new();
    let mut played = 0;
    let mut attempts = 0;
    while played < moves && attempts < moves * 20 {
        attempts += 1;
        let x = fastrand::usize(..SIZE);
        let y = fastrand::usize(..SIZE);
        let color = engine.to_move();
        match engine.apply_move(x, y) {
            Ok(outcome) => {
                played += 1;
                if outcome.captured > 0 {
                    println!(
                        "move {:>3}: {:?} {} captures {}",
                        engine.cursor(),
                        color,
                        format_coord((x, y)),
                        outcome.captured
                    );
                }
            }
            Err(_) => continue, // occupied or suicide, pick another point
        }
    }

    println!("{}", engine.board());
    println!(
        "moves: {}  black captures: {}  white captures: {}",
        engine.cursor(),
        engine.captures(Color::Black),
        engine.captures(Color::White)
    );

    if let Some(path) = save {
        fs::write(&path, engine.save())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("saved to {}", path.display());
    }
    Ok(())
}

fn show_saved(file: &Path, index: Option<usize>) -> anyhow::Result<()> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let mut engine =
        Engine::load(&bytes).with_context(|| format!("corrupt save file {}", file.display()))?;

    if let Some(i) = index {
        let len = engine.history_len();
        engine
            .jump_to(i)
            .with_context(|| format!("index {i} out of range (0..{len})"))?;
    }

    let state = engine.current_state();
    println!("{}", state.board);
    match state.last_move {
        Some(pt) => println!("move {}: last played {}", engine.cursor(), format_coord(pt)),
        None => println!("move 0: initial position"),
    }
    println!(
        "black captures: {}  white captures: {}  {:?} to move",
        state.black_captures, state.white_captures, state.to_move
    );
    Ok(())
}
