//! Texture store.
//!
//! A non-send resource that stores loaded textures keyed by static string
//! IDs. Textures are loaded during setup and referenced by key from
//! [`Sprite`](crate::components::sprite::Sprite) components.
//!
//! Note: this is a non-send resource because raylib textures must be
//! accessed from the main thread only. Insert with
//! `insert_non_send_resource` and read via `non_send_resource`.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
pub struct TextureStore {
    textures: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Register a texture under the given key.
    pub fn add(&mut self, key: &'static str, texture: Texture2D) {
        self.textures.insert(key, texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
