use pegsolver::board::topology;
use pegsolver::perft::perft;
use pegsolver::Setup;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Count move paths of a fixed length")]
struct Args {
    /// Path length in moves
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Positions that start empty; defaults to 1
    #[arg(value_name = "HOLES")]
    holes: Vec<u8>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let depth = args.depth;
    let base = Setup::from_holes(&args.holes)?.occupancy();
    let topo = topology::standard();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth == 0 {
            perft(topo, base, depth)
        } else {
            topo.legal_moves(base).par_iter().map(|&mv| perft(topo, base.play(mv), depth - 1)).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
