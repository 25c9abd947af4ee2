//! # Tuning
//!
//! Each game keeps its constants in a plain struct with sensible defaults. A JSON file next to the assets can override any of them without a rebuild; fields left out of the file keep their defaults as long as the struct is `#[serde(default)]`.

use std::{fs, path::Path};

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads tuning from `path`, falling back to `T::default()` when the file is missing or malformed. A malformed file is logged, never fatal.
pub fn load_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> T {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("no tuning file at {}, using defaults", path.display());
        return T::default();
    }
    match read(path) {
        Ok(tuning) => {
            log::info!("loaded tuning from {}", path.display());
            tuning
        }
        Err(err) => {
            log::warn!("{:#}; using defaults", err);
            T::default()
        }
    }
}

pub fn read<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("couldn't read tuning file {}", path.display()))?;
    parse(&text).with_context(|| format!("couldn't parse tuning file {}", path.display()))
}

pub fn parse<T: DeserializeOwned>(text: &str) -> anyhow::Result<T> {
    Ok(serde_json::from_str(text)?)
}
