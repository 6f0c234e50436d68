use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Export file used when the user leaves the filename prompt blank.
pub const DEFAULT_EXPORT_FILE: &str = "transactions.csv";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSection {
    /// Directory relative filenames resolve against (current dir when unset)
    pub directory: Option<String>,
    #[serde(default = "default_export_file")]
    pub default_file: String,
    /// Forced format; inferred from the file extension when unset
    pub format: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            directory: None,
            default_file: default_export_file(),
            format: None,
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: true,
        }
    }
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_true() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Load the config at `path`, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BudgetConfig::default());
    }
    read_config(path)
}

pub fn write_config(path: &Path, config: &BudgetConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("budget"));
        }
    }
    Ok(home_dir()?.join(".config").join("budget"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
