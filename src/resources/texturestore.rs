//! Texture store resource.
//!
//! Raylib textures of the reel symbols keyed by symbol key. Filled by
//! [`TextureLoader`] while the symbol catalog loads and read by the render
//! system.

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::error::ReelError;
use crate::resources::symbolcatalog::SymbolLoader;

/// Map of symbol keys to loaded textures.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// [`SymbolLoader`] backed by raylib. Must run on the main thread.
pub struct TextureLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub store: &'a mut TextureStore,
}

impl SymbolLoader for TextureLoader<'_> {
    fn load(&mut self, key: &str, path: &str) -> Result<(f32, f32), ReelError> {
        let texture = self.rl.load_texture(self.thread, path).map_err(|e| {
            warn!("Failed to load texture {}: {}", path, e);
            ReelError::AssetLoad {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;
        let size = (texture.width as f32, texture.height as f32);
        self.store.insert(key, texture);
        Ok(size)
    }
}
