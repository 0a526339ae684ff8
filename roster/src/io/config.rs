//! Browser configuration stored in `roster.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::paginate::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_WINDOW, PageSize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "roster.toml";

/// Browser configuration (TOML).
///
/// Missing fields default to the values used by the admin dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Records per page.
    pub page_size: usize,

    /// Number of page buttons in the navigation window.
    pub page_window: usize,

    /// JSON record file read and updated by the CLI.
    pub records_path: PathBuf,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
            records_path: PathBuf::from("records.json"),
        }
    }
}

impl BrowserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow!("page_size must be > 0"));
        }
        if self.page_window == 0 {
            return Err(anyhow!("page_window must be > 0"));
        }
        if self.records_path.as_os_str().is_empty() {
            return Err(anyhow!("records_path must not be empty"));
        }
        Ok(())
    }

    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::new(self.page_size).ok_or_else(|| anyhow!("page_size must be > 0"))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BrowserConfig::default()`.
pub fn load_config(path: &Path) -> Result<BrowserConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = BrowserConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BrowserConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(page_size = cfg.page_size, page_window = cfg.page_window, "config loaded");
    Ok(cfg)
}
