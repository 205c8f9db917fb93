use super::SpawnConfig;
use crate::error::{Result, SpawnError};
use std::path::Path;
use std::{env, fs};

pub const SPAWN_CONFIG_PATH_ENV: &str = "SPAWN_CONFIG_PATH";
pub const SPAWN_PROFILE_ENV: &str = "SPAWN_PROFILE";

pub(super) fn load_from_env() -> Result<SpawnConfig> {
    let path = env::var(SPAWN_CONFIG_PATH_ENV).ok();
    let profile = env::var(SPAWN_PROFILE_ENV).ok();
    resolve(path.as_deref(), profile.as_deref())
}

fn resolve(path: Option<&str>, profile: Option<&str>) -> Result<SpawnConfig> {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => load_from_path(Path::new(path)),
        None => {
            let profile = profile.unwrap_or_default();
            tracing::debug!(profile, "using spawn config preset");
            Ok(SpawnConfig::from_profile(profile))
        }
    }
}

pub(crate) fn load_from_path(path: &Path) -> Result<SpawnConfig> {
    let content = fs::read_to_string(path)
        .map_err(|source| SpawnError::ConfigIo { path: path.to_path_buf(), source })?;

    let config = SpawnConfig::from_json(&content)?;
    config.validate()?;

    tracing::info!(path = %path.display(), "loaded spawn config");
    Ok(config)
}

impl SpawnConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_from_path(path.as_ref())
    }
}
