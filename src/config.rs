//! Command line and environment configuration.

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use crate::api::fixer::BASE_URL;

#[derive(Debug, Parser)]
#[command(version, about = "Convert between currencies using fixer.io exchange rates")]
pub struct Args {
    /// SQLite file holding the saved API key
    #[arg(long, env = "CONVERTER_DB", default_value = "~/.currency-converter/settings.db")]
    pub db: String,

    /// Directory for the log file
    #[arg(long, env = "CONVERTER_LOG_DIR", default_value = "~/.currency-converter/logs")]
    pub log_dir: String,

    /// fixer.io API key; replaces the saved one
    #[arg(long, env = "FIXER_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, env = "FIXER_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Seconds between automatic rate refreshes
    #[arg(long, default_value_t = 600)]
    pub refresh_secs: u64,

    /// Quiet period before auto-converting after an edit
    #[arg(long, default_value_t = 500)]
    pub debounce_ms: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub api_key: Option<String>,
    pub base_url: String,
    pub refresh_interval: Duration,
    pub debounce: Duration,
}

impl Args {
    pub fn into_config(self) -> Result<Config> {
        let db_path = PathBuf::from(shellexpand::tilde(&self.db).into_owned());
        let log_dir = PathBuf::from(shellexpand::tilde(&self.log_dir).into_owned());

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create {}", log_dir.display()))?;

        Ok(Config {
            db_path,
            log_dir,
            api_key: self.api_key.filter(|key| !key.trim().is_empty()),
            base_url: self.base_url,
            refresh_interval: Duration::from_secs(self.refresh_secs),
            debounce: Duration::from_millis(self.debounce_ms),
        })
    }
}
