//! Symbol catalog resource.
//!
//! The ordered list of symbols a reel can show. Wheel sequences store catalog
//! indices, so the order of entries is significant: the configured winning
//! index refers to a position in this list.
//!
//! Symbols are described by a JSON [`SymbolManifest`] and loaded through a
//! [`SymbolLoader`], the seam to whatever actually owns the textures. The
//! catalog only keeps each symbol's key and natural size.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ReelError;

/// One entry of the symbol manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// Identifier used for lookups and as the texture key.
    pub key: String,
    /// Location of the image.
    pub path: String,
}

/// JSON description of the symbol catalog.
///
/// ```json
/// { "symbols": [ { "key": "egghead", "path": "./assets/textures/egghead.png" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolManifest {
    pub symbols: Vec<SymbolEntry>,
}

impl SymbolManifest {
    pub fn from_json(text: &str) -> Result<Self, ReelError> {
        serde_json::from_str(text).map_err(|e| ReelError::Manifest(e.to_string()))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ReelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ReelError::Manifest(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}

/// Loads a symbol asset and reports its natural size in pixels.
pub trait SymbolLoader {
    fn load(&mut self, key: &str, path: &str) -> Result<(f32, f32), ReelError>;
}

/// A loaded symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInfo {
    pub key: String,
    pub width: f32,
    pub height: f32,
}

/// Ordered catalog of loaded symbols.
#[derive(Resource, Debug, Clone, Default)]
pub struct SymbolCatalog {
    symbols: Vec<SymbolInfo>,
}

impl SymbolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every manifest entry, in order. The first failure aborts.
    pub fn load(
        manifest: &SymbolManifest,
        loader: &mut impl SymbolLoader,
    ) -> Result<Self, ReelError> {
        if manifest.symbols.is_empty() {
            return Err(ReelError::EmptyCatalog);
        }
        let mut catalog = Self::new();
        for entry in &manifest.symbols {
            catalog.register(loader, &entry.key, &entry.path)?;
        }
        info!("Loaded {} reel symbols", catalog.len());
        Ok(catalog)
    }

    /// Add a symbol, or return the index of an already known key.
    pub fn register(
        &mut self,
        loader: &mut impl SymbolLoader,
        key: &str,
        path: &str,
    ) -> Result<usize, ReelError> {
        if let Some(index) = self.index_of(key) {
            return Ok(index);
        }
        let (width, height) = loader.load(key, path)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(ReelError::AssetLoad {
                key: key.to_string(),
                reason: format!("degenerate size {}x{}", width, height),
            });
        }
        debug!("Registered symbol '{}' ({}x{})", key, width, height);
        self.symbols.push(SymbolInfo {
            key: key.to_string(),
            width,
            height,
        });
        Ok(self.symbols.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&SymbolInfo> {
        self.symbols.get(index)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.key == key)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Uniform scale that fits the symbol into a `width` x `height` box.
    pub fn fit_scale(&self, index: usize, width: f32, height: f32) -> f32 {
        self.get(index)
            .map(|s| (width / s.width).min(height / s.height))
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLoader {
        calls: usize,
    }

    impl SymbolLoader for FixedLoader {
        fn load(&mut self, key: &str, _path: &str) -> Result<(f32, f32), ReelError> {
            self.calls += 1;
            match key {
                "broken" => Err(ReelError::AssetLoad {
                    key: key.to_string(),
                    reason: "missing file".into(),
                }),
                "wide" => Ok((200.0, 100.0)),
                _ => Ok((100.0, 100.0)),
            }
        }
    }

    fn manifest(keys: &[&str]) -> SymbolManifest {
        SymbolManifest {
            symbols: keys
                .iter()
                .map(|k| SymbolEntry {
                    key: k.to_string(),
                    path: format!("./assets/textures/{}.png", k),
                })
                .collect(),
        }
    }

    #[test]
    fn test_manifest_from_json() {
        let m = SymbolManifest::from_json(
            r#"{ "symbols": [ { "key": "skully", "path": "skully.png" } ] }"#,
        )
        .unwrap();
        assert_eq!(m.symbols.len(), 1);
        assert_eq!(m.symbols[0].key, "skully");
    }

    #[test]
    fn test_manifest_from_bad_json() {
        assert!(matches!(
            SymbolManifest::from_json("{ \"symbols\": 3 }"),
            Err(ReelError::Manifest(_))
        ));
    }

    #[test]
    fn test_load_keeps_manifest_order() {
        let mut loader = FixedLoader { calls: 0 };
        let catalog = SymbolCatalog::load(&manifest(&["a", "b", "c"]), &mut loader).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of("c"), Some(2));
        assert_eq!(catalog.get(1).unwrap().key, "b");
    }

    #[test]
    fn test_load_empty_manifest_fails() {
        let mut loader = FixedLoader { calls: 0 };
        assert!(matches!(
            SymbolCatalog::load(&manifest(&[]), &mut loader),
            Err(ReelError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_load_propagates_asset_failure() {
        let mut loader = FixedLoader { calls: 0 };
        let result = SymbolCatalog::load(&manifest(&["a", "broken", "c"]), &mut loader);
        assert!(matches!(result, Err(ReelError::AssetLoad { .. })));
        assert_eq!(loader.calls, 2);
    }

    #[test]
    fn test_register_known_key_does_not_reload() {
        let mut loader = FixedLoader { calls: 0 };
        let mut catalog = SymbolCatalog::load(&manifest(&["a", "b"]), &mut loader).unwrap();
        assert_eq!(catalog.register(&mut loader, "b", "b.png").unwrap(), 1);
        assert_eq!(loader.calls, 2);
        assert_eq!(catalog.register(&mut loader, "new", "new.png").unwrap(), 2);
        assert_eq!(loader.calls, 3);
    }

    #[test]
    fn test_fit_scale_uses_smaller_ratio() {
        let mut loader = FixedLoader { calls: 0 };
        let catalog = SymbolCatalog::load(&manifest(&["wide"]), &mut loader).unwrap();
        // 150/200 = 0.75 against 150/100 = 1.5
        assert!((catalog.fit_scale(0, 150.0, 150.0) - 0.75).abs() < 1e-6);
    }
}
