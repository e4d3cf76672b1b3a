use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::{
    assets::loader::ImageLoader,
    foundation::core::RasterImage,
    foundation::error::{MaskError, MaskResult},
    pipeline::extract::alpha_to_luminance,
};

/// Named registry of alpha-extracted masks.
///
/// Extraction runs once at registration time; shape requests only ever read the
/// stored mask. The map is insertion-ordered and guarded by an interior lock, so a
/// shared store supports concurrent registration and reads. Registration under an
/// existing name overwrites silently and keeps the name's original position (last
/// write wins, no versioning).
#[derive(Debug, Default)]
pub struct MaskStore {
    masks: RwLock<IndexMap<String, RasterImage>>,
}

impl MaskStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract and register a decoded image under `name`.
    ///
    /// Returns the name the mask was stored under.
    pub fn register(&self, name: &str, image: &RasterImage) -> MaskResult<String> {
        validate_name(name)?;
        let mask = alpha_to_luminance(image);
        Ok(self.insert_prepared(name.to_string(), mask))
    }

    /// Extract and register a batch of decoded images.
    ///
    /// Entries are independent, so extraction fans out across the rayon pool;
    /// insertion order of `entries` becomes registry order.
    pub fn register_many(&self, entries: Vec<(String, RasterImage)>) -> MaskResult<Vec<String>> {
        for (name, _) in &entries {
            validate_name(name)?;
        }
        let prepared: Vec<(String, RasterImage)> = entries
            .into_par_iter()
            .map(|(name, image)| {
                let mask = alpha_to_luminance(&image);
                (name, mask)
            })
            .collect();
        Ok(prepared
            .into_iter()
            .map(|(name, mask)| self.insert_prepared(name, mask))
            .collect())
    }

    /// Fetch `source` through `loader`, then extract and register it under `name`.
    ///
    /// Loader failures propagate verbatim; nothing is retried and nothing partial
    /// is stored. Calling again with an existing name reloads (replaces) the mask.
    pub fn register_from_loader(
        &self,
        loader: &dyn ImageLoader,
        source: &str,
        name: &str,
    ) -> MaskResult<String> {
        if source.is_empty() || name.is_empty() {
            return Err(MaskError::validation(
                "registration requires both a source and a name",
            ));
        }
        let image = loader.fetch(source)?;
        self.register(name, &image)
    }

    /// The stored (alpha-extracted) mask for `name`, without transforms.
    pub fn get(&self, name: &str) -> MaskResult<RasterImage> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| MaskError::not_found(name))
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of registered masks.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no masks.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn insert_prepared(&self, name: String, mask: RasterImage) -> String {
        let width = mask.width();
        let height = mask.height();
        self.write().insert(name.clone(), mask);
        tracing::info!(name = %name, width, height, "mask registered");
        name
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, RasterImage>> {
        self.masks.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, RasterImage>> {
        self.masks.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn validate_name(name: &str) -> MaskResult<()> {
    if name.is_empty() {
        return Err(MaskError::validation("mask name must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/store.rs"]
mod tests;
