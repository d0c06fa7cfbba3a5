//! Headless runner: seeds a 640×480 grid and steps it, logging timings.

use std::time::Instant;

use life_engine::automaton::seed::random_grid;
use life_engine::{Engine, EngineConfig, ScreenGrid};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        error!(%err, "life failed");
        std::process::exit(1);
    }
}

fn run() -> life_engine::Result<()> {
    let config = EngineConfig::from_args(std::env::args().skip(1))?;
    info!(
        generations = config.generations,
        strategy = %config.strategy,
        seed = ?config.seed,
        "starting headless run"
    );

    let grid: ScreenGrid = random_grid(config.seed)?;
    let mut engine = Engine::with_grid(grid, config.strategy)?;
    info!(population = engine.population(), "seeded");

    let start = Instant::now();
    let mut window = Instant::now();
    for _ in 0..config.generations {
        engine.step();

        let generation = engine.generation();
        if config.report_every != 0 && generation % config.report_every == 0 {
            let per_step = window.elapsed().as_secs_f64() * 1000.0 / config.report_every as f64;
            info!(
                generation,
                population = engine.population(),
                ms_per_step = format_args!("{:.3}", per_step),
                "progress"
            );
            window = Instant::now();
        }
    }

    let total = start.elapsed();
    let avg = if config.generations == 0 {
        0.0
    } else {
        total.as_secs_f64() * 1000.0 / config.generations as f64
    };
    info!(
        generation = engine.generation(),
        population = engine.population(),
        total_ms = format_args!("{:.1}", total.as_secs_f64() * 1000.0),
        avg_ms = format_args!("{:.3}", avg),
        "done"
    );
    Ok(())
}
