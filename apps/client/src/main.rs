//! # Vela Client Entry Point
//!
//! Headless runner: loads configuration, warms the catalog the way the app
//! does on launch and reports what it found.
//!
//! ```text
//! vela-client [CONFIG_PATH]
//! ```
//!
//! Exits non-zero when configuration or the catalog API fails.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;
use vela_client::commands::product::get_catalog;

#[tokio::main]
async fn main() -> ExitCode {
    vela_client::init_tracing();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    match vela_client::run(config_path).await {
        Ok(session) => {
            let catalog = get_catalog(&session.catalog, None);
            for category in &catalog.categories {
                let count = catalog
                    .products
                    .iter()
                    .filter(|p| p.category.id == category.id)
                    .count();
                println!("{:<24} {:>4} products", category.name, count);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Client startup failed");
            ExitCode::FAILURE
        }
    }
}
