use serde::Deserialize;
use std::path::PathBuf;

/// Optional operator configuration. CLI flags win over config values, config
/// over built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/empre/config.toml"))
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
