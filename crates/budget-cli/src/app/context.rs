//! Application context for the Budget CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and resolves
//! the settings the menu session needs.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use budget_core::ExportFormat;

use crate::cli::Cli;
use crate::config::{default_config_path, load_config, BudgetConfig};
use crate::ui::UiContext;

use super::settings::ExportSettings;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<BudgetConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file location: `--config` / `BUDGET_CONFIG`, else the XDG default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match self.cli.config.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => default_config_path(),
        }
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&BudgetConfig> {
        self.config
            .get_or_try_init(|| load_config(&self.config_path()?))
    }

    /// Build the UI context from flags, config and environment.
    pub fn ui_context(&self) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        Ok(UiContext::from_env(
            self.cli.format.as_deref(),
            self.cli.no_color || !config.ui.color,
            self.cli.ascii || config.ui.ascii,
        ))
    }

    /// Resolve where and how exports are written.
    ///
    /// Precedence: `--export-dir` / `BUDGET_EXPORT_DIR`, then the config file.
    pub fn export_settings(&self) -> anyhow::Result<ExportSettings> {
        let config = self.config()?;
        let directory = self
            .cli
            .export_dir
            .clone()
            .or_else(|| config.export.directory.clone())
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        let format = config
            .export
            .format
            .as_deref()
            .map(|value| value.parse::<ExportFormat>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid [export] format in config: {}", e))?;

        Ok(ExportSettings {
            directory,
            default_file: config.export.default_file.clone(),
            format,
        })
    }
}
