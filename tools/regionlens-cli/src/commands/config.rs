//! Show or initialize the configuration file.

use regionlens_common::config::{config_file_path, AppConfig};

pub fn run(init: bool, config: &AppConfig) -> anyhow::Result<()> {
    if init {
        let path = config_file_path();
        if path.exists() {
            println!("Config already exists at: {}", path.display());
            return Ok(());
        }
        let path = AppConfig::default()
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("Wrote default config to: {}", path.display());
        return Ok(());
    }

    println!("Config file: {}", config_file_path().display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
