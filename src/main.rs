//! itemcodec command line
//!
//! Loads a stored item document, reads every item through the codec, logs
//! the entries that fail and saves the normalized document back.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use itemcodec::{
    untranslated, ConfigNode, DocumentStore, FeatureSet, ItemCodec, ItemDocument, StaticRegistry,
};

/// Normalize a stored item document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the document, without the .json extension
    document: String,

    /// Directory holding the documents
    #[arg(long, env = "ITEMCODEC_DIR")]
    dir: Option<PathBuf>,

    /// Treat the platform as a legacy one
    #[arg(long)]
    legacy: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{} item(s) could not be read", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns how many items failed to read
fn run(args: &Args) -> Result<usize, String> {
    let directory = args.dir.clone().unwrap_or_else(DocumentStore::default_location);
    let store = DocumentStore::new(&directory)
        .map_err(|e| format!("Failed to open {}: {}", directory.display(), e))?;

    let document = store
        .load(&args.document)
        .map_err(|e| format!("Failed to load '{}': {}", args.document, e))?;

    let registry = StaticRegistry::create_default();
    let features = if args.legacy {
        FeatureSet::legacy()
    } else {
        FeatureSet::modern()
    };
    let codec = ItemCodec::new(&registry, &features);

    let batch = codec.read_all(&document.items, &untranslated, None);
    for failure in &batch.failures {
        log::warn!("{}: {}", failure.key, failure.error);
    }

    // Entries that failed are kept as they were
    let mut items = ConfigNode::new();
    for (key, original) in document.items.iter() {
        match batch.items.get(key) {
            Some(item) => codec.write(item, items.section_mut(key), &untranslated),
            None => items.set(key, original.clone()),
        }
    }

    store
        .save(&args.document, &ItemDocument::new(items))
        .map_err(|e| format!("Failed to save '{}': {}", args.document, e))?;

    Ok(batch.failures.len())
}
