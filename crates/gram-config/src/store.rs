use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_namespace() -> String {
    "gram_panchayat_learned_words".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Persist learned words; when off they last for the session only
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory of the store slot, defaults to the user data dir
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dir: None,
            namespace: default_namespace(),
        }
    }
}
