use std::path::Path;

use gram_core::dictionary::{LoadError, PhraseTable};

pub struct MarathiLoader;

impl MarathiLoader {
    /// Load the built-in phrase table
    pub fn load_embedded_base() -> Result<PhraseTable, LoadError> {
        let json = include_str!("../data/base_mr_en.json");
        let table = PhraseTable::from_json("base_mr_en", json)?;
        tracing::info!("Loaded {} embedded phrases", table.len());
        Ok(table)
    }

    /// Load the built-in fragment table (particles, conjunctions, question words)
    pub fn load_embedded_fragments() -> Result<PhraseTable, LoadError> {
        let json = include_str!("../data/fragments_mr_en.json");
        let table = PhraseTable::from_json("fragments_mr_en", json)?;
        tracing::info!("Loaded {} embedded fragments", table.len());
        Ok(table)
    }

    /// Load a phrase table from file path
    pub fn load_from_file(path: &Path) -> Result<PhraseTable, LoadError> {
        tracing::info!("Loading phrase table from file: {}", path.display());
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "additional".to_string());
        let table = PhraseTable::from_file(name, path)?;
        tracing::info!("Loaded {} phrases from file", table.len());
        Ok(table)
    }

    /// Embedded phrases plus every loadable file in `additional_paths`.
    /// Files that fail to load are skipped with a warning; on conflicts the
    /// embedded table wins, then earlier files.
    pub fn load_base(additional_paths: &[String]) -> PhraseTable {
        let mut table = Self::load_embedded_base().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded phrase table: {}", e);
            tracing::warn!("Starting with empty phrase table");
            PhraseTable::new("base_mr_en")
        });

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    let added = table.merge(additional);
                    tracing::info!("Merged {} new phrases from: {}", added, path);
                }
                Err(e) => {
                    tracing::warn!("Failed to load phrase table from {}: {}", path, e);
                }
            }
        }

        table
    }

    pub fn load_fragments() -> PhraseTable {
        Self::load_embedded_fragments().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded fragment table: {}", e);
            PhraseTable::new("fragments_mr_en")
        })
    }
}
