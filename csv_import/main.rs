mod boilerplate;
mod entry;
mod keywords;
mod markup;
mod report;
mod store;

use std::path::Path;

use anyhow::{Context, Result};
use config::Config;
use tracing::{error, info};

use report::RunReport;

const CSV_PATH: &str = "data/kb_rows.csv";
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
    info!(settings_loaded = ?settings, msg = "Starting csv import");

    println!("KB CSV Import");
    println!("=============\n");

    if let Err(err) = run(Path::new(CSV_PATH), Path::new(COLLECTION_PATH)) {
        error!(error = ?err, msg = "import failed");
        println!("Error: {err:#}");
    }
}

fn run(csv_path: &Path, collection_path: &Path) -> Result<()> {
    let mut collection =
        store::load_collection(collection_path).context("loading existing collection")?;
    println!("Loaded existing collection with {} entries", collection.len());

    let max_id = store::max_entry_id(&collection);
    info!(max_id, msg = "continuing id sequence");

    let rows = store::fetch_rows(csv_path).context("reading source rows")?;
    println!("Loaded {} source rows\n", rows.len());

    let mut run_report = RunReport::default();
    let batch = entry::build_batch(&rows, max_id, &mut run_report);
    println!("Processed {} entries from CSV", batch.len());
    run_report.print();

    entry::merge_into(&mut collection, &batch).context("serializing batch")?;
    store::save_collection(collection_path, &collection).context("writing collection")?;

    println!(
        "\nAdded {} entries to {}",
        batch.len(),
        collection_path.display()
    );
    println!("Total entries in collection: {}", collection.len());
    report::print_samples(&batch);

    println!("\nDone.");
    Ok(())
}
