//! Global dayplan configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_days_visible() -> u32 {
    7
}

fn is_default_days_visible(n: &u32) -> bool {
    *n == default_days_visible()
}

/// Configuration at ~/.config/dayplan/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DayPlanConfig {
    /// Where the calendar state file lives. Defaults to the platform data
    /// directory (e.g. ~/.local/share/dayplan/state.json).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Visible-day count used when no persisted state exists yet.
    #[serde(
        default = "default_days_visible",
        skip_serializing_if = "is_default_days_visible"
    )]
    pub days_visible: u32,
}

impl DayPlanConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default template on first run.
    pub fn load() -> Result<DayPlanConfig> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(DayPlanConfig {
                data_file: None,
                days_visible: default_days_visible(),
            });
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Could not parse {}", config_path.display()))?;
        Ok(config)
    }

    /// The resolved path of the persisted calendar state.
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("dayplan");
        Ok(data_dir.join("state.json"))
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &std::path::Path) -> Result<()> {
        let contents = "\
# dayplan configuration

# Where the calendar state is stored:
# data_file = \"~/.local/share/dayplan/state.json\"

# How many upcoming days a fresh calendar shows:
# days_visible = 7
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(())
    }
}
