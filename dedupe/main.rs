mod store;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use config::Config;
use itertools::Itertools;
use serde_json::Value;
use tracing::{error, info};

const COLLECTION_PATH: &str = "data/knowledge_base.json";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() {
    init_tracing();
    let settings = Config::builder()
        .add_source(config::Environment::with_prefix("KB"))
        .build()
        .unwrap_or_default();
    info!(settings_loaded = ?settings, msg = "Starting dedupe");

    println!("KB Dedupe");
    println!("=========\n");

    if let Err(err) = run(Path::new(COLLECTION_PATH)) {
        error!(error = ?err, msg = "dedupe failed");
        println!("Error: {err:#}");
    }
}

fn run(collection_path: &Path) -> Result<()> {
    let entries = store::load_collection(collection_path).context("loading collection")?;
    println!("Original entries: {}", entries.len());

    let unique = dedupe_by_title(&entries);
    println!("Unique entries after deduplication: {}", unique.len());
    println!("Removed duplicates: {}", entries.len() - unique.len());

    let backup = store::backup_path(collection_path);
    store::save_collection(&backup, &entries).context("writing backup")?;
    println!("Backup created: {}", backup.display());

    store::save_collection(collection_path, &unique).context("writing collection")?;
    println!("Duplicates removed.");

    print_top_duplicates(&entries);

    println!("\nDone.");
    Ok(())
}

/// One entry per title, first occurrence's position, longest content wins.
/// Entries without a string title pass through untouched.
fn dedupe_by_title(entries: &[Value]) -> Vec<Value> {
    let mut kept: Vec<Value> = Vec::new();
    let mut by_title: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let Some(title) = entry.get("title").and_then(Value::as_str) else {
            kept.push(entry.clone());
            continue;
        };
        match by_title.get(title) {
            None => {
                by_title.insert(title.to_string(), kept.len());
                kept.push(entry.clone());
            }
            Some(&idx) => {
                if content_len(entry) > content_len(&kept[idx]) {
                    kept[idx] = entry.clone();
                }
            }
        }
    }
    kept
}

fn content_len(entry: &Value) -> usize {
    entry
        .get("content")
        .and_then(Value::as_str)
        .map(str::len)
        .unwrap_or(0)
}

fn print_top_duplicates(entries: &[Value]) {
    let duplicated: Vec<(&str, usize)> = entries
        .iter()
        .filter_map(|e| e.get("title").and_then(Value::as_str))
        .counts()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .sorted_by_key(|(_, count)| Reverse(*count))
        .take(10)
        .collect();

    if duplicated.is_empty() {
        println!("\nNo duplicated titles.");
        return;
    }
    println!("\nTop duplicated titles:");
    for (title, count) in duplicated {
        println!("  \"{}\": {} times", title, count);
    }
}
