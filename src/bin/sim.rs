use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Board, Combatant, Match};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Match::new(
        Combatant::new(Board::generate(&mut rng), Box::new(AiPlayer::new())),
        Combatant::new(Board::generate(&mut rng), Box::new(AiPlayer::new())),
    )?;
    let report = game.play(&mut rng)?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
