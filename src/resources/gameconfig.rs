//! Host configuration resource.
//!
//! Everything the binary reads from its INI file: window settings, where the
//! symbol manifest lives and the `[reel]` parameters parsed by
//! [`ReelConfig`]. Keys that are absent keep their defaults; keys that are
//! present but malformed are reported instead of silently ignored.
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//!
//! [symbols]
//! manifest = ./assets/symbols.json
//!
//! [reel]
//! element_count = 3
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::ReelError;
use crate::resources::reelconfig::ReelConfig;

const WINDOW: &str = "window";
const SYMBOLS: &str = "symbols";

/// Window settings of the host binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 120,
            vsync: true,
        }
    }
}

impl WindowConfig {
    fn apply_ini(&mut self, ini: &Ini) -> Result<(), ReelError> {
        let uint = |key: &str| {
            ini.getuint(WINDOW, key)
                .map_err(|e| ReelError::ConfigFile(format!("[window] {}: {}", key, e)))
                .map(|v| v.map(|v| v as u32))
        };
        if let Some(v) = uint("width")? {
            self.width = v;
        }
        if let Some(v) = uint("height")? {
            self.height = v;
        }
        if let Some(v) = uint("target_fps")? {
            self.target_fps = v;
        }
        if let Some(v) = ini
            .getbool(WINDOW, "vsync")
            .map_err(|e| ReelError::ConfigFile(format!("[window] vsync: {}", e)))?
        {
            self.vsync = v;
        }
        Ok(())
    }

    fn store_ini(&self, ini: &mut Ini) {
        ini.set(WINDOW, "width", Some(self.width.to_string()));
        ini.set(WINDOW, "height", Some(self.height.to_string()));
        ini.set(WINDOW, "target_fps", Some(self.target_fps.to_string()));
        ini.set(WINDOW, "vsync", Some(self.vsync.to_string()));
    }
}

/// Host configuration, kept as a resource once the reel is running.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// JSON manifest listing the reel symbols.
    pub manifest_path: PathBuf,
    pub reel: ReelConfig,
    /// File this configuration is loaded from and saved to.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_path("./config.ini")
    }
}

impl GameConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            window: WindowConfig::default(),
            manifest_path: PathBuf::from("./assets/symbols.json"),
            reel: ReelConfig::new(),
            config_path: path.into(),
        }
    }

    /// Read `config_path`, overriding the values it sets.
    ///
    /// On any error `self` is left exactly as it was.
    pub fn load_from_file(&mut self) -> Result<(), ReelError> {
        let text = std::fs::read_to_string(&self.config_path)
            .map_err(|e| ReelError::ConfigFile(format!("{}: {}", self.config_path.display(), e)))?;
        self.load_from_str(&text)
    }

    /// Apply INI `text`, all or nothing.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ReelError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| ReelError::ConfigFile(format!("{}: {}", self.config_path.display(), e)))?;

        let mut next = self.clone();
        next.window.apply_ini(&ini)?;
        if let Some(manifest) = ini.get(SYMBOLS, "manifest") {
            next.manifest_path = PathBuf::from(manifest);
        }
        next.reel.apply_ini(&ini)?;
        *self = next;

        info!(
            "Config {}: {}x{} @ {} fps, manifest {}",
            self.config_path.display(),
            self.window.width,
            self.window.height,
            self.window.target_fps,
            self.manifest_path.display()
        );
        Ok(())
    }

    /// Write every value to `config_path`, creating the file if needed.
    pub fn save_to_file(&self) -> Result<(), ReelError> {
        let mut ini = Ini::new();
        self.window.store_ini(&mut ini);
        ini.set(
            SYMBOLS,
            "manifest",
            Some(self.manifest_path.display().to_string()),
        );
        self.reel.store_ini(&mut ini);

        ini.write(&self.config_path)
            .map_err(|e| ReelError::ConfigFile(format!("{}: {}", self.config_path.display(), e)))?;
        info!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::reelconfig::SpinDirection;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("slotreel_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing"));
        assert!(matches!(
            config.load_from_file(),
            Err(ReelError::ConfigFile(_))
        ));
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.reel, ReelConfig::new());
    }

    #[test]
    fn test_malformed_window_value_is_reported() {
        let path = temp_config_path("malformed");
        std::fs::write(&path, "[window]\nwidth = wide\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        let result = config.load_from_file();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ReelError::ConfigFile(msg)) if msg.contains("width")));
    }

    #[test]
    fn test_bad_reel_value_leaves_config_untouched() {
        let path = temp_config_path("badreel");
        std::fs::write(
            &path,
            "[window]\nwidth = 640\n\n[symbols]\nmanifest = ./other.json\n\n\
             [reel]\nelement_count = 3\nspin_direction = 2\n",
        )
        .unwrap();
        let mut config = GameConfig::with_path(&path);
        let result = config.load_from_file();
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.manifest_path, PathBuf::from("./assets/symbols.json"));
        assert_eq!(config.reel, ReelConfig::new());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_config_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.window.width = 800;
        saved.window.target_fps = 60;
        saved.window.vsync = false;
        saved.manifest_path = PathBuf::from("./other/symbols.json");
        saved.reel.element_count = 3;
        saved.reel.arrow_slot_index = 1;
        saved.reel.spin_direction = SpinDirection::Reverse;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.window, saved.window);
        assert_eq!(loaded.manifest_path, PathBuf::from("./other/symbols.json"));
        assert_eq!(loaded.reel.element_count, 3);
        assert_eq!(loaded.reel.arrow_slot_index, 1);
        assert_eq!(loaded.reel.spin_direction, SpinDirection::Reverse);
    }
}
