//! Host configuration.
//!
//! The page may pass a JSON object to `run`; any field it leaves out keeps
//! its default, and no JSON at all means every default.

use serde::{Deserialize, Serialize};

use crate::error::HostError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    /// Relative URL of the compiled game module.
    pub module_url: String,
    /// Milliseconds between `fixed_update` calls, handed to Tangle.
    pub fixed_update_interval: f64,
    /// Canvas width and height in pixels; the arena is square.
    pub arena_size: u32,
    /// Added to every coordinate so one-pixel lines land on pixel centers.
    pub pixel_offset: f64,
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            module_url: "tron.wasm".to_string(),
            fixed_update_interval: 1000.0 / 60.0,
            arena_size: 256,
            pixel_offset: 0.5,
            log_level: "info".to_string(),
        }
    }
}

impl HostConfig {
    /// Parse the optional JSON handed to `run`. Blank input means defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, HostError> {
        let config = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => serde_json::from_str(json)?,
        };
        Ok(config)
    }

    /// `log_level` as a [`log::Level`]. `run` rejects unknown names.
    pub fn level(&self) -> Result<log::Level, HostError> {
        self.log_level
            .parse()
            .map_err(|_| HostError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_json_means_defaults() {
        assert_eq!(HostConfig::from_json(None).unwrap(), HostConfig::default());
        assert_eq!(HostConfig::from_json(Some("  ")).unwrap(), HostConfig::default());
    }

    #[test]
    fn defaults_match_the_sixty_hertz_arena() {
        let config = HostConfig::default();
        assert_eq!(config.canvas_id, "canvas");
        assert_eq!(config.module_url, "tron.wasm");
        assert!((config.fixed_update_interval - 16.667).abs() < 0.001);
        assert_eq!(config.arena_size, 256);
        assert_eq!(config.pixel_offset, 0.5);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            HostConfig::from_json(Some(r#"{"module_url":"build/tron.wasm","log_level":"debug"}"#))
                .unwrap();
        assert_eq!(config.module_url, "build/tron.wasm");
        assert_eq!(config.level().unwrap(), log::Level::Debug);
        assert_eq!(config.canvas_id, "canvas");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = HostConfig::from_json(Some("{not json"));
        assert!(matches!(result, Err(HostError::Config(_))));
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let config = HostConfig::from_json(Some(r#"{"log_level":"loud"}"#)).unwrap();
        assert_eq!(config.log_level, "loud");
        assert!(matches!(config.level(), Err(HostError::LogLevel(level)) if level == "loud"));
    }
}
