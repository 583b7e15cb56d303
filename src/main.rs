//! math4games - smoke report for the game math library
//!
//! Loads configuration, runs every scenario in [`math4games::smoke`] and
//! prints the results with the configured precision.

use std::time::Instant;

use math4games::config::AppConfig;
use math4games::smoke;

fn main() {
    // Logging depends on the configured level, so report load errors after init
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting math4games smoke report");

    let iterations = config.smoke.iterations.max(1);
    let start = Instant::now();
    let mut report = smoke::run(&config.smoke);
    for _ in 1..iterations {
        report = smoke::run(&config.smoke);
    }
    let elapsed = start.elapsed();

    for line in report.render(config.display.precision) {
        println!("{}", line);
    }

    log::info!(
        "Ran {} iteration(s) in {:?} ({:?} each)",
        iterations,
        elapsed,
        elapsed / iterations
    );
}
