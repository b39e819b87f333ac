#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::prelude::*;
#[cfg(feature = "std")]
use seabattle::MatchReport;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer from the terminal (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let two computer players fight and print the outcome.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => run_menu(seed),
        Commands::Auto { seed } => run_auto(seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn print_rules() {
    println!("\n=== SEA BATTLE ===");
    println!("Enter shots as two numbers separated by a space: row col");
    println!("    row - row number (1-6)");
    println!("    col - column number (1-6)");
}

/// Start/quit menu. Each play-through gets a fresh match; nothing carries
/// over between games except the random source.
#[cfg(feature = "std")]
fn run_menu(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    loop {
        print_rules();
        println!("\n1 - start game");
        println!("2 - quit");
        print!("\nYour choice: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim() {
            "1" => {
                if let Err(e) = play_against_computer(&mut rng) {
                    eprintln!("Game ended with an error: {}", e);
                    return Ok(());
                }
            }
            "2" => return Ok(()),
            other => println!("Unknown choice: {:?}", other),
        }
    }
}

#[cfg(feature = "std")]
fn play_against_computer(rng: &mut SmallRng) -> anyhow::Result<MatchReport> {
    let human_board = Board::generate(rng);
    let mut ai_board = Board::generate(rng);
    ai_board.set_concealed(true);

    let mut game = Match::new(
        Combatant::new(human_board, Box::new(CliPlayer::stdio())),
        Combatant::new(ai_board, Box::new(AiPlayer::new())),
    )?;
    game.play(rng)
}

#[cfg(feature = "std")]
fn run_auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Match::new(
        Combatant::new(Board::generate(&mut rng), Box::new(AiPlayer::new())),
        Combatant::new(Board::generate(&mut rng), Box::new(AiPlayer::new())),
    )?;
    let report = game.play(&mut rng)?;

    for side in [Side::A, Side::B] {
        println!("\nBoard of side {:?}:", side);
        println!("{}", game.combatant(side).board());
    }
    println!(
        "\nSide {:?} wins after {} moves ({} shots by A, {} by B)",
        report.winner, report.turns, report.shots[0], report.shots[1]
    );
    Ok(())
}
