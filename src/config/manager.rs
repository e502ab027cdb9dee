use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Config, ConfigError};

const HOME_DIR: &str = ".hemolink";
const CONFIG_FILE: &str = "config.json";
const STAGING_FILE: &str = "config.json.tmp";

/// Reads and writes the `config.json` under the HemoLink home directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `HEMOLINK_HOME`, falling back to `~/.hemolink`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = match env::var_os("HEMOLINK_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir().unwrap_or_default().join(HOME_DIR),
        };
        Self::with_base_dir(home)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Stages the JSON next to the target and renames it over the old file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let body = serde_json::to_vec_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let staging = dir.join(STAGING_FILE);
        fs::write(&staging, body)?;
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
