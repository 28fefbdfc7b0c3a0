use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_kontoline_home, kontoline_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub import: ImportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Print JSON instead of text unless a command says otherwise
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSection {
    /// Currency for amounts that carry no code of their own
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for ImportSection {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(kontoline_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("in {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_kontoline_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
