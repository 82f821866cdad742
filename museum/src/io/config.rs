//! Kiosk configuration stored as TOML.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::receipt::ReceiptLayout;

/// Kiosk configuration (TOML).
///
/// Edited by museum staff. Missing fields fall back to the standard receipt
/// text and warnings enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KioskConfig {
    /// Log room dataset inconsistencies when the kiosk is built.
    pub warn_on_room_inconsistencies: bool,

    pub receipt: ReceiptLayout,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            warn_on_room_inconsistencies: true,
            receipt: ReceiptLayout::default(),
        }
    }
}

impl KioskConfig {
    pub fn validate(&self) -> Result<()> {
        if self.receipt.header.trim().is_empty() {
            return Err(anyhow!("receipt.header must be non-empty"));
        }
        if self.receipt.separator.trim().is_empty() {
            return Err(anyhow!("receipt.separator must be non-empty"));
        }
        if self.receipt.header.contains('\n') || self.receipt.separator.contains('\n') {
            return Err(anyhow!("receipt.header and receipt.separator must be single lines"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// A missing file yields `KioskConfig::default()`; any other read failure is
/// an error.
pub fn load_config(path: &Path) -> Result<KioskConfig> {
    let cfg = match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<KioskConfig>(&contents)
            .with_context(|| format!("parse kiosk config {}", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "kiosk config missing, using defaults");
            KioskConfig::default()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read kiosk config {}", path.display()));
        }
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KioskConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize kiosk config")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
