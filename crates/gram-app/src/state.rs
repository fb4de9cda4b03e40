use std::path::{Path, PathBuf};
use std::sync::Arc;

use gram_config::Config;
use gram_core::store::{JsonFileStore, LearnedStore, MemoryStore};
use gram_lang_marathi::MarathiTranslator;

use crate::profile;

pub struct AppState {
    pub config: Config,
    pub translator: MarathiTranslator,
}

impl AppState {
    /// `store_dir` overrides the configured store directory
    pub fn new(config: Config, store_dir: Option<&Path>) -> Self {
        let store = build_store(&config, store_dir);
        let translator =
            MarathiTranslator::from_config(&config.translator, &config.dictionary, store);

        Self { config, translator }
    }

    pub fn source_lang(&self) -> &str {
        &self.config.translator.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.config.translator.target_lang
    }
}

fn build_store(config: &Config, store_dir: Option<&Path>) -> Arc<dyn LearnedStore> {
    if !config.store.enabled {
        tracing::info!("Learned words store disabled, learning lasts for this run only");
        return Arc::new(MemoryStore::new());
    }

    let dir = store_dir
        .map(Path::to_path_buf)
        .or_else(|| config.store.dir.as_ref().map(PathBuf::from))
        .or_else(profile::default_data_dir);

    match dir {
        Some(dir) => {
            let store = JsonFileStore::new(&dir, &config.store.namespace);
            tracing::debug!("Learned words store at {}", store.path().display());
            Arc::new(store)
        }
        None => {
            tracing::warn!("No data directory available, learned words will not be saved");
            Arc::new(MemoryStore::new())
        }
    }
}
