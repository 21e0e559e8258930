use clap::Parser;
use movie_shelf::utils::{logger, validation::Validate};
use movie_shelf::{AppConfig, OmdbClient, Shell, SqliteStore};
use std::io;

fn main() {
    // A .env beside the binary may carry API_KEY; absence is fine.
    let _ = dotenvy::dotenv();

    let config = AppConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting movie-shelf");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let store = match SqliteStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Cannot open database '{}': {}", config.db_path, e);
            eprintln!("Error: cannot open database '{}': {}", config.db_path, e);
            std::process::exit(1);
        }
    };

    let fetch_config = match config.fetch_config() {
        Ok(fetch_config) => fetch_config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let metadata = match OmdbClient::new(fetch_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: cannot build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        &store,
        &metadata,
        config.report_config(),
        stdin.lock(),
        stdout.lock(),
    );

    if let Err(e) = shell.run() {
        tracing::error!("Shell terminated abnormally: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
