//! tauri-updater-json - Generate `latest.json` for the Tauri updater.
//!
//! Scans a Tauri project's bundle output for signed installers, copies them to
//! the output directory and merges them into the updater manifest.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging; progress is reported at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match tauri_updater_json::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
