use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use monte_carlo_pi::{count_inside, logging, UniformSquare};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "monte_carlo_pi", about = "Estimate pi by sampling random points in the unit square")]
struct Cli {
    /// Number of points to sample
    #[arg(default_value_t = 10_000_000_000, allow_negative_numbers = true)]
    points: i64,

    /// Seed the generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let start = Instant::now();
    let estimate = match cli.seed {
        Some(seed) => count_inside(cli.points, &mut UniformSquare::seeded(seed)),
        None => count_inside(cli.points, &mut UniformSquare::from_entropy()),
    }
    .with_context(|| format!("failed to estimate pi with {} points", cli.points))?;

    info!(
        inside = estimate.inside,
        error = estimate.abs_error(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "estimate complete"
    );
    println!("{}", estimate);
    Ok(())
}
