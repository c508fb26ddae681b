use gbce_clock::SystemClock;
use gbce_runner::{RunnerConfig, RunnerError, ScenarioRunner};
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"GBCE - Global Beverage Corporation Exchange analytics demo

USAGE:
    gbce [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with defaults
    gbce

    # Run with a 5 minute VWAP window and custom sample trades
    gbce --config gbce.json
"#
    );
}

fn main() -> Result<(), RunnerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => RunnerConfig::default(),
    };
    log::info!("VWAP window: {}s", config.analytics.vwap_window_secs);
    log::info!("Sample trades: {}", config.sample_trades.len());

    let mut runner = ScenarioRunner::from_config(&config, Arc::new(SystemClock::new()))?;
    let report = runner.run();

    print!("{}", report);
    Ok(())
}
