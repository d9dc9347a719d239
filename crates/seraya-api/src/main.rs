//! Seraya API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p seraya-api
//! ```
//!
//! Print an Argon2 hash for `ADMIN_PASSWORD_HASH` with:
//! ```bash
//! cargo run -p seraya-api -- hash-password <password>
//! ```

use seraya_common::{hash_password, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [command, password] = args.as_slice() {
        if command == "hash-password" {
            match hash_password(password) {
                Ok(hash) => println!("{hash}"),
                Err(e) => {
                    eprintln!("Failed to hash password: {e}");
                    std::process::exit(1);
                }
            }
            return;
        }
    }

    // Load configuration before tracing so the log format follows APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Seraya API Server..."
    );

    if let Err(e) = seraya_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
