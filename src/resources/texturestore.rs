//! Resident texture store.
//!
//! Owns the GPU textures and hands out [`TextureHandle`]s that sprites keep
//! instead of the textures themselves. Raylib textures must stay on the main
//! thread, so the store is inserted as a non-send resource.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

use crate::sprites::TextureHandle;

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a texture and return a handle to it.
    ///
    /// Replaces any texture previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) -> TextureHandle {
        let key = key.into();
        let handle = TextureHandle::new(key.as_str(), texture.width, texture.height);
        if self.map.insert(key, texture).is_some() {
            log::debug!("Replaced texture '{}'", handle.key());
        }
        handle
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
