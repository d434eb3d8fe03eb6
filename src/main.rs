use anyhow::Result;
use clap::Parser;
use log::info;
use pegsolver::{Report, SearchParams, Searcher, Setup};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the longest jump sequence on the 15-hole peg triangle", long_about = None)]
struct Args {
    /// Positions (1..15) that start without a peg; defaults to 1
    #[arg(value_name = "HOLES")]
    holes: Vec<u8>,

    /// Threads for the root split
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Draw the board before and after the sequence
    #[arg(long)]
    show_board: bool,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let setup = Setup::from_holes(&args.holes)?;
    let start = setup.occupancy();

    let mut searcher = Searcher::default();
    let params = SearchParams { threads: args.threads.max(1), ..SearchParams::default() };
    let t0 = Instant::now();
    let res = searcher.search_in_pool(start, params)?;
    let elapsed = t0.elapsed();
    info!("solved in {:.3}s", elapsed.as_secs_f64());

    let report = Report::new(&setup, res.sequence.clone());
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        if args.show_board { println!("{start}\n"); }
        println!("{report}");
        if args.show_board {
            let mut end = start;
            for &mv in &report.sequence { end = end.apply_move(mv)?; }
            println!("\n{end}");
        }
    }

    if args.verbose {
        eprintln!("nodes: {} cache hits: {} cache entries: {} workers: {} elapsed: {:.3}s",
            res.nodes, res.cache_hits, res.cache_entries, res.workers, elapsed.as_secs_f64());
    }
    Ok(())
}
