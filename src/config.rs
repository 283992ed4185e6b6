use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:1234/v1/chat/completions".into(),
            model: "local-model".into(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub llm: LlmConfig,

    /// Paper-shuffle pause before a new day dawns. 0 disables it.
    pub day_advance_delay_ms: u64,

    /// Fixed seed for reproducible games; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            day_advance_delay_ms: 600,
            seed: None,
        }
    }
}

pub fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("whitehall_dispatch");
    path.push("config.json");
    path
}

/// Missing file means defaults. A malformed one is logged and ignored.
pub fn load_config_from(path: &Path) -> GameConfig {
    let Ok(text) = fs::read_to_string(path) else {
        return GameConfig::default();
    };

    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring malformed config at {}: {}", path.display(), e);
            GameConfig::default()
        }
    }
}

pub fn save_config_to(path: &Path, config: &GameConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn load_config() -> GameConfig {
    load_config_from(&config_path())
}

pub fn save_config(config: &GameConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}
