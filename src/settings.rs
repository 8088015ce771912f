use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fire: FireSettings,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FireSettings {
    pub seed: Option<u64>,   // Used when --seed is not given
    pub frames: Option<u64>, // Default frame count for --print
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), "ignoring malformed settings: {err}");
                Self::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), "cannot read settings: {err}");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let settings: Self = toml::from_str(content)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfire")
            .join("config.toml")
    }
}
