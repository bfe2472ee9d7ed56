#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{print_boards, print_shot, ConsoleInput},
    Game, GameError, Turn, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{thread, time::Duration};

/// Play sea battle against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE as u8, value_parser = clap::value_parser!(u8).range(6..=9))]
    size: u8,
    #[arg(long, default_value_t = 1000, help = "Pause between moves in milliseconds")]
    delay_ms: u64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let delay = Duration::from_millis(cli.delay_ms);

    println!("Game start");
    println!(
        "Enter a move as two numbers from 1 to {}: x (column) then y (row), e.g. \"3 4\" or \"34\"",
        cli.size
    );
    let mut game = Game::versus_computer(&mut rng, usize::from(cli.size), ConsoleInput);

    loop {
        print_boards(&game);
        if let seabattle::GameState::Playing { active, .. } = game.state() {
            let name = game.combatant(active).name();
            if !game.board(active.other()).all_destroyed() {
                println!("{} to move:", name);
            }
        }
        let turn = match game.step(&mut rng) {
            Ok(turn) => turn,
            Err(GameError::InputClosed) => {
                println!("Input closed, leaving the game");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        match turn {
            Turn::Fired { shot, .. } => {
                print_shot(&shot);
                thread::sleep(delay);
            }
            Turn::Finished { winner } => {
                let loser = game.combatant(winner.other()).name();
                println!("All ships of {} destroyed", loser);
                println!("{} wins", game.combatant(winner).name());
                break;
            }
        }
    }
    Ok(())
}
