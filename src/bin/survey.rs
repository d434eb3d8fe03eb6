use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use pegsolver::{Position, Report, Searcher, Setup};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "survey", about = "Solve every single-hole start")]
struct Args {
    /// Worker threads (one start per task)
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Emit one JSON object per line
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let starts: Vec<Position> = Position::all().collect();

    let pb = ProgressBar::new(starts.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} starts")?);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let reports: Vec<Report> = pool.install(|| {
        starts.par_iter().map(|&hole| {
            let setup = Setup::single(hole);
            let mut searcher = Searcher::default();
            let res = searcher.search(setup.occupancy());
            info!("hole {hole}: {} moves, {} nodes", res.sequence.len(), res.nodes);
            pb.inc(1);
            Report::new(&setup, res.sequence)
        }).collect()
    });
    pb.finish_and_clear();

    for r in &reports {
        if args.json {
            println!("{}", r.to_json()?);
        } else {
            let hole = r.empty_positions.first().map(|p| p.get()).unwrap_or_default();
            println!("hole {:>2}: removed {:>2} left {}", hole, r.pegs_removed, r.pegs_remaining);
        }
    }
    Ok(())
}
