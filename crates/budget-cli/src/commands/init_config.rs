use crate::app::AppContext;
use crate::config::{write_config, BudgetConfig};

/// Write a default config file unless one already exists.
pub fn handle_init_config(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() {
        if !ctx.quiet() {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    write_config(&path, &BudgetConfig::default())?;
    tracing::info!(path = %path.display(), "wrote default config");
    if !ctx.quiet() {
        println!("Wrote default config to {}", path.display());
    }
    Ok(())
}
