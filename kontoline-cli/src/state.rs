use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$KONTOLINE_HOME`, or `~/.kontoline`.
pub fn kontoline_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("KONTOLINE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".kontoline"))
}

pub fn ensure_kontoline_home() -> Result<PathBuf> {
    let dir = kontoline_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
