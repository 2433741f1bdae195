//! Poll loop: fetch, extract, derive, render, sleep.
//!
//! A failed fetch is reported as one red line and the loop keeps going at
//! the same interval. No backoff, no retry cap: the tool runs until the
//! process is terminated.

use anyhow::{Context, Result};
use console::Term;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::client::{EurekaClient, FetchError};
use crate::config::Config;
use crate::render;
use crate::snapshot::StatusSnapshot;

/// What one cycle produced: a full dashboard, or a single error line.
#[derive(Debug, PartialEq)]
pub enum CycleOutput {
    Dashboard(String),
    Error(String),
}

/// Turn one fetch result into displayable text. Pure apart from the clock
/// reading inside the render, so the error path is testable offline.
pub fn run_cycle(fetched: Result<Value, FetchError>, width: usize, color: bool) -> CycleOutput {
    match fetched {
        Ok(doc) => {
            let snapshot = StatusSnapshot::from_json(&doc);
            CycleOutput::Dashboard(render::render_now(&snapshot, width, color))
        }
        Err(err) => CycleOutput::Error(render::render_fetch_error(&err.to_string(), color)),
    }
}

/// Run the dashboard until the process is killed.
pub async fn run(config: &Config) -> Result<()> {
    let client = EurekaClient::new(&config.url, config.timeout())?;
    let term = Term::stdout();
    debug!("polling {} every {}s", client.url(), config.interval_secs);

    loop {
        let (_, cols) = term.size();
        match run_cycle(client.fetch().await, cols as usize, config.color) {
            CycleOutput::Dashboard(text) => {
                let _ = term.clear_screen();
                println!("{}", text);
            }
            CycleOutput::Error(line) => {
                // The red line is the user-facing report; keep the trace
                // below the default filter so stderr carries one line.
                debug!("poll failed, retrying in {}s", config.interval_secs);
                eprintln!("{}", line);
            }
        }
        tokio::time::sleep(config.interval()).await;
    }
}

/// One-shot mode: fetch the document once and write it out pretty-printed.
pub async fn dump(config: &Config, path: &Path) -> Result<()> {
    let client = EurekaClient::new(&config.url, config.timeout())?;
    let doc = client
        .fetch()
        .await
        .with_context(|| format!("Failed to fetch {}", config.url))?;
    let keys = write_dump(&doc, path)?;
    println!("Wrote {} top-level keys to {}", keys, path.display());
    Ok(())
}

/// Write the document as pretty JSON; returns the top-level key count.
fn write_dump(doc: &Value, path: &Path) -> Result<usize> {
    let pretty = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, pretty)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(doc.as_object().map(|o| o.len()).unwrap_or(0))
}
