//! Chat relay server binary.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin banter-server -- --port 3000
//! ```

use clap::Parser;

use banter::{ServerConfig, logger::setup_logger};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();
    setup_logger("banter", &config.log_level);

    if let Err(e) = banter::run(&config).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
