//! Board settings loaded from the bundled `config/board.json`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use super::color::{normalize_hex_color, DEFAULT_CARD_COLOR};
use super::error::{BoardError, BoardResult};

const BUNDLED_CONFIG: &str = include_str!("../../config/board.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    /// Pointer travel in CSS pixels before a press on a card turns into a drag.
    pub drag_activation_distance: f64,
    pub default_card_color: String,
    pub seed_demo_data: bool,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Project Kanban Board".to_string(),
            drag_activation_distance: 8.0,
            default_card_color: DEFAULT_CARD_COLOR.to_string(),
            seed_demo_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> BoardResult<Self> {
        let mut config: BoardConfig = serde_json::from_str(raw)?;
        config.default_card_color = normalize_hex_color(&config.default_card_color)
            .ok_or_else(|| BoardError::InvalidColor(config.default_card_color.clone()))?;
        if !config.drag_activation_distance.is_finite() || config.drag_activation_distance < 0.0 {
            config.drag_activation_distance = BoardConfig::default().drag_activation_distance;
        }
        Ok(config)
    }

    pub fn bundled() -> BoardResult<Self> {
        Self::from_json(BUNDLED_CONFIG)
    }

    /// Like `from_json`, but an unusable file yields the defaults.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("Falling back to default board config: {}", e);
            Self::default()
        })
    }

    pub fn load_or_default() -> Self {
        Self::from_json_or_default(BUNDLED_CONFIG)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
