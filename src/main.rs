use linemean::lyrics::GRIECHISCHER_WEIN;
use linemean::{report, Config, LineStats};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    // Config errors surface before the subscriber exists, so report them directly
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(log_level = %config.log_level, format = %config.format, "linemean started");

    if let Err(e) = run(&config) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let stats = LineStats::from_text(GRIECHISCHER_WEIN);
    debug!(
        line_count = stats.line_count,
        total_chars = stats.total_chars,
        "Measured built-in text"
    );

    println!("{}", report::render(&stats, config.format)?);
    Ok(())
}
