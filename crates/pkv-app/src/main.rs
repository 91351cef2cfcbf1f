use std::fs::File;
use std::io::{self, BufReader, Write};

use pkv_app::request::{OccurrenceRequest, handle};
use pkv_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    // Request from the first argument, stdin otherwise
    let request = match std::env::args_os().nth(1) {
        Some(path) => {
            tracing::debug!(path = ?path, "Reading request file");
            OccurrenceRequest::from_reader(BufReader::new(File::open(path)?))?
        }
        None => OccurrenceRequest::from_reader(io::stdin().lock())?,
    };

    let occurrences = handle(&request, &config.calendar)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &occurrences)?;
    writeln!(stdout)?;

    Ok(())
}
