//! Replay a pointer script and print the notifications it produces.
//!
//! ```sh
//! RUST_LOG=interact=debug interact-replay script.json
//! ```

use anyhow::{Context, Result};
use interact::replay::Script;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: interact-replay <script.json>")?;

    let script = Script::load(&path).with_context(|| format!("Failed to load script {}", path))?;
    let report = script.run().context("Replay failed")?;

    for notification in &report.notifications {
        println!("{}", serde_json::to_string(notification)?);
    }
    println!("{}", serde_json::to_string_pretty(&report.snapshot)?);

    if !report.prevented_steps.is_empty() {
        tracing::info!(steps = ?report.prevented_steps, "Default action suppressed");
    }
    Ok(())
}
