use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Extra phrase files (flat JSON objects) merged after the built-in table.
    /// Earlier entries win on conflicts.
    #[serde(default)]
    pub additional_paths: Vec<String>,
}
