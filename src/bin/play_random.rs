use clap::Parser;
use pegsolver::board::topology;
use pegsolver::playout;
use pegsolver::{Searcher, Setup};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "play_random", about = "Compare random play against the optimal sequence")]
struct Args {
    /// Positions that start empty; defaults to 1
    #[arg(value_name = "HOLES")]
    holes: Vec<u8>,
    #[arg(long, default_value_t = 1000)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let setup = Setup::from_holes(&args.holes)?;
    let start = setup.occupancy();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let stats = playout::sample(topology::standard(), start, args.games, &mut rng);
    let optimum = Searcher::default().search(start).sequence.len();

    println!("random games: {}", stats.games);
    println!("removed: best {} worst {} mean {:.2}", stats.best, stats.worst, stats.mean);
    println!("optimum: {optimum}");
    Ok(())
}
