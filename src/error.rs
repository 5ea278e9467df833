//! Error type shared by configuration, asset loading and reel setup.
//!
//! Spinning itself has no failure path: a spin that passes its guard always
//! runs to completion. Everything that can go wrong happens before that, at
//! configuration or initialization time, and is reported as a [`ReelError`].

use std::fmt;

/// Failures raised while configuring or initializing a reel.
#[derive(Debug, Clone, PartialEq)]
pub enum ReelError {
    /// A configuration value would produce a broken layout or timing.
    InvalidConfig(String),
    /// The symbol catalog has no entries.
    EmptyCatalog,
    /// The configured winning index does not name a catalog entry.
    WinningIndexOutOfRange { index: usize, catalog_len: usize },
    /// A symbol key was not found in the catalog.
    UnknownSymbol(String),
    /// The asset collaborator failed to load a symbol.
    AssetLoad { key: String, reason: String },
    /// The symbol manifest could not be read or parsed.
    Manifest(String),
    /// The INI configuration file could not be read or written.
    ConfigFile(String),
    /// The entity has no reel yet.
    NotInitialized,
    /// A reel system could not run on the world.
    System(String),
}

impl fmt::Display for ReelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReelError::InvalidConfig(msg) => write!(f, "invalid reel configuration: {}", msg),
            ReelError::EmptyCatalog => write!(f, "symbol catalog is empty"),
            ReelError::WinningIndexOutOfRange { index, catalog_len } => write!(
                f,
                "winning index {} is out of range for a catalog of {} symbols",
                index, catalog_len
            ),
            ReelError::UnknownSymbol(key) => write!(f, "unknown symbol '{}'", key),
            ReelError::AssetLoad { key, reason } => {
                write!(f, "failed to load symbol '{}': {}", key, reason)
            }
            ReelError::Manifest(msg) => write!(f, "symbol manifest error: {}", msg),
            ReelError::ConfigFile(msg) => write!(f, "config file error: {}", msg),
            ReelError::NotInitialized => write!(f, "reel is not initialized"),
            ReelError::System(msg) => write!(f, "reel system failed: {}", msg),
        }
    }
}

impl std::error::Error for ReelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_value() {
        let err = ReelError::WinningIndexOutOfRange {
            index: 7,
            catalog_len: 4,
        };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains('4'));

        let err = ReelError::UnknownSymbol("cherry".into());
        assert!(err.to_string().contains("cherry"));
    }
}
