//! # Assets
//!
//! Textures are loaded once, up front, and looked up by file name afterwards.

use std::collections::HashMap;

use anyhow::bail;
use futures::future::join_all;
use macroquad::texture::{load_texture, FilterMode, Texture2D};

#[derive(Default)]
pub struct Textures {
    by_name: HashMap<String, Texture2D>,
}

impl Textures {
    /// No textures at all; every lookup misses. Handy in tests, where there is no window to load into.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every named file under `dir` concurrently. Each failure is logged; if any file fails the whole load fails, so a game never starts half-dressed.
    pub async fn load(dir: &str, names: &[&str]) -> anyhow::Result<Self> {
        let dir = dir.trim_end_matches('/');
        let paths: Vec<String> = names
            .iter()
            .map(|name| format!("{}/{}", dir, name))
            .collect();
        let results = join_all(paths.iter().map(|path| load_texture(path))).await;

        let mut textures = Self::empty();
        let mut missing = Vec::new();
        for ((name, path), result) in names.iter().zip(paths.iter()).zip(results) {
            match result {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Linear);
                    textures.insert(name, texture);
                }
                Err(err) => {
                    log::error!("failed to load texture {}: {:?}", path, err);
                    missing.push(path.as_str());
                }
            }
        }
        if !missing.is_empty() {
            bail!(
                "{} of {} textures failed to load: {}",
                missing.len(),
                names.len(),
                missing.join(", ")
            );
        }
        log::info!("loaded {} textures from {}", textures.len(), dir);
        Ok(textures)
    }

    pub fn insert(&mut self, name: &str, texture: Texture2D) {
        self.by_name.insert(name.to_owned(), texture);
    }

    pub fn get(&self, name: &str) -> Option<Texture2D> {
        let texture = self.by_name.get(name).copied();
        if texture.is_none() && !self.by_name.is_empty() {
            log::warn!("texture {} was never loaded", name);
        }
        texture
    }

    /// Looks up several names at once, keeping misses as `None` so positions line up.
    pub fn get_all(&self, names: &[&str]) -> Vec<Option<Texture2D>> {
        names.iter().map(|name| self.get(name)).collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
