//! Matchday engine binary.
//!
//! Runs the alert engine as a long-lived process: load configuration,
//! start the evaluation cycle and reminder poll, and shut down cleanly on
//! Ctrl-C.
//!
//! # Usage
//!
//! ```bash
//! matchday --config config.yaml --data ./matchday-data
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `MATCHDAY_*` - Configuration overrides (see [`matchday::config`])

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use matchday::{
    api::HttpRequester, config::Config, engine::Engine, notifications::SystemPush,
    storage::Storage,
};

/// Command-line arguments for the Matchday engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: String,

    /// Path to the directory for storing persistent state (notifications,
    /// dedup ledger, reminders, followed teams).
    #[arg(short, long)]
    data: String,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting matchday {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Normalize the API URL by removing a trailing slash if present
    if config.api.url.ends_with('/') {
        config.api.url.pop();
    }

    let storage = Storage::new(&args.data);
    let requester = HttpRequester::new(&config.api.url);
    let push = Box::new(SystemPush::new(config.push.enabled));
    let check_interval = Duration::from_secs(config.api.polling_interval);

    let mut engine = Engine::new(requester, storage, push, check_interval).await;
    engine.start();

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }

    info!("Shutting down...");
    engine.stop();
}
