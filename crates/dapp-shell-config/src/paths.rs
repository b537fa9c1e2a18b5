//! Cache directory for release-build log files
//!
//! Resolved through the `dirs` crate:
//! - Linux: `~/.cache/dapp-shell/`
//! - macOS: `~/Library/Caches/dapp-shell/`
//! - Windows: `%LOCALAPPDATA%\dapp-shell\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "dapp-shell";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}
