use broadside::{init_logging, init_logging_at, Board, CellState, SkillLevel, TargetingEngine, DEFAULT_BOARD_SIZE};
use clap::Parser;
use log::LevelFilter;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Let the computer opponent sink randomly placed fleets and report how many
/// missiles it needed.
#[derive(Parser, Debug)]
#[command(name = "sim")]
struct Args {
    /// Skill level of the computer opponent.
    #[arg(long, value_enum, default_value_t = SkillLevel::Expert)]
    skill: SkillLevel,
    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Log level; overrides `BROADSIDE_LOG`.
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn play_one(skill: SkillLevel, size: usize, rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut target = Board::with_size(size, CellState::Ocean)?;
    target.place_fleet_randomly(rng)?;
    let mut engine = TargetingEngine::with_size(skill, size)?;

    let mut shots = 0;
    while !target.fleet().is_destroyed() {
        let coord = engine.find_target(rng)?;
        let result = target.receive_missile(coord)?;
        engine.record_guess(coord, result)?;
        shots += 1;
        anyhow::ensure!(shots <= size * size, "fleet still afloat after {} shots", shots);
    }
    log::debug!("final board:\n{}", target);
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.log_level {
        Some(level) => init_logging_at(level),
        None => init_logging(),
    }
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut shots = Vec::with_capacity(args.games);
    for game in 0..args.games {
        let n = play_one(args.skill, args.size, &mut rng)?;
        log::info!("game {}: fleet sunk in {} shots", game + 1, n);
        shots.push(n);
    }
    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };

    let report = json!({
        "skill": args.skill,
        "seed": seed,
        "size": args.size,
        "shots": shots,
        "mean": mean,
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
