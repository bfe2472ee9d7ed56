use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Game, Side, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::generate(
        &mut rng,
        BOARD_SIZE,
        ("player1", Box::new(AiPlayer::new())),
        ("player2", Box::new(AiPlayer::new())),
    );
    let winner = game.run(&mut rng)?;
    let shots = [game.shots_fired(Side::First), game.shots_fired(Side::Second)];

    let result = json!({
        "winner": game.combatant(winner).name(),
        "winner_side": winner,
        "turns": shots[0] + shots[1],
        "shots": {"player1": shots[0], "player2": shots[1]},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
