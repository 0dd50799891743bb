use connect_four::{GameSession, GameStatus, Player};
use rand::seq::IteratorRandom;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    moves: usize,
    status: GameStatus,
    winner: Option<Player>,
    board: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::default();

    while session.status() == GameStatus::InProgress {
        let col = session
            .board()
            .available_columns()
            .choose(&mut rng)
            .ok_or_else(|| anyhow::anyhow!("no free column while game in progress"))?;
        session.play_turn(col).map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match session.status() {
        GameStatus::Won(p) => Some(p),
        _ => None,
    };
    let report = SimReport {
        seed,
        moves: session.moves(),
        status: session.status(),
        winner,
        board: session.board().to_string().lines().map(String::from).collect(),
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
