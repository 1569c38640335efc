//! Tiny Cache - command-line demonstration
//!
//! Stores every `key=value` argument in a bounded LRU cache and prints the
//! resulting state as JSON.
//!
//! ```text
//! CACHE_MAX_ELEMENTS=2 tiny_cache a=1 b=2 c=3
//! ```

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiny_cache::{Cache, Config, LruCache};

const SAMPLE_ENTRIES: &[(&str, &str)] = &[
    ("alpha", "first"),
    ("beta", "second"),
    ("gamma", "third"),
    ("alpha", "first, again"),
];

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiny_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_elements={}, max_size_bytes={}",
        config.max_elements, config.max_size_bytes
    );

    let entries = parse_entries(std::env::args().skip(1))?;
    let cache = LruCache::new(config.limit());

    for (key, value) in entries {
        match cache.set(&key, value) {
            Ok(()) => info!(key = %key, "stored"),
            Err(err) => warn!("skipped: {}", err),
        }
    }

    let report = json!({
        "limit": cache.limit(),
        "usage": cache.usage(),
        "stats": cache.stats(),
        "keys": cache.keys(),
    });
    let output = serde_json::to_string_pretty(&report).context("failed to render report")?;
    println!("{output}");

    Ok(())
}

/// Splits `key=value` arguments, falling back to a sample set when none are given.
fn parse_entries<I>(args: I) -> Result<Vec<(String, String)>>
where
    I: IntoIterator<Item = String>,
{
    let mut entries = Vec::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got '{arg}'");
        };
        entries.push((key.to_string(), value.to_string()));
    }

    if entries.is_empty() {
        entries = SAMPLE_ENTRIES
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
    }
    Ok(entries)
}
