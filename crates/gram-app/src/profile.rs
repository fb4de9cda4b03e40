use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use gram_config::Config;

const CONFIG_FILE: &str = "config.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "gram-panchayat", "gram-translate")
}

/// `<config dir>/gram-translate/config.json`, when the platform has a home
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Default directory of the learned words store
pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Read a config file. Missing sections and fields take their defaults.
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Resolve the config: an explicit path must exist, otherwise the user
/// config file is used when present, else defaults. Environment overrides
/// are applied on top.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => load_config_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_config_file(&path)?,
            None => Config::default(),
        },
    };

    Ok(config.with_env())
}

/// Write the default config to `path`. Returns false if a file was already
/// there and `force` is off.
pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        tracing::info!("Config already exists at {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, serde_json::to_string_pretty(&Config::default())?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Created default config at {}", path.display());
    Ok(true)
}

/// Initialize the user config file if missing
pub fn init_user_config(force: bool) -> anyhow::Result<(PathBuf, bool)> {
    let path = default_config_path().context("no config directory on this platform")?;
    let written = write_default_config(&path, force)?;
    Ok((path, written))
}
