// KujiraPixel
// copyright kujira project 2026

//! Run configuration. A game reads an optional TOML file next to its
//! binary; a missing file means defaults, a malformed file is an error.

use serde::Deserialize;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// world seed; None seeds from entropy at startup
    pub seed: Option<u64>,
    pub sprite_path: String,
    pub log_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sprite_path: "assets/whale.png".to_string(),
            log_path: "log/whale.log".to_string(),
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e),
        };
        toml::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = GameConfig::load("no/such/whale.toml").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.sprite_path, "assets/whale.png");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: GameConfig = toml::from_str("seed = 42").unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, "log/whale.log");
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let dir = std::env::temp_dir().join("kujira_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "seed = ").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
