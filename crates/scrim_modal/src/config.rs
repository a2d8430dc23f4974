//! Modal configuration files
//!
//! Lets an app keep its modal presets in TOML. Keys accept both snake_case and
//! the camelCase prop names (`animationType`, `modalCardPosition`, ...).
//! Unknown animation or position names degrade to their defaults rather than
//! failing; only malformed TOML or mistyped values produce an error.
//!
//! ```toml
//! animationType = "flipAndScale"
//! modalCardPosition = "bottom"
//! duration = 250
//!
//! [backdrop]
//! color = { r = 0.0, g = 0.0, b = 0.0, a = 0.6 }
//! activeOpacity = 0.9
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::animation_type::AnimationType;
use crate::backdrop::BackdropConfig;
use crate::error::{ModalError, Result};
use crate::position::{CardPosition, DEFAULT_EDGE_OFFSET};
use crate::props::{ModalProps, DEFAULT_DURATION_MS};

/// Static modal settings, everything except visibility and content
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    #[serde(alias = "noAnimation")]
    pub no_animation: bool,
    #[serde(alias = "animationType")]
    pub animation_type: AnimationType,
    #[serde(alias = "modalCardPosition", alias = "position")]
    pub card_position: CardPosition,
    #[serde(alias = "edgeOffset")]
    pub edge_offset: f32,
    #[serde(alias = "duration")]
    pub duration_ms: u32,
    #[serde(alias = "useNativeDriver")]
    pub use_native_driver: bool,
    pub backdrop: BackdropConfig,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            no_animation: false,
            animation_type: AnimationType::Default,
            card_position: CardPosition::Center,
            edge_offset: DEFAULT_EDGE_OFFSET,
            duration_ms: DEFAULT_DURATION_MS,
            use_native_driver: false,
            backdrop: BackdropConfig::default(),
        }
    }
}

impl ModalConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ModalConfig = toml::from_str(text)?;
        tracing::debug!(
            animation_type = config.animation_type.name(),
            card_position = config.card_position.name(),
            duration_ms = config.duration_ms,
            "loaded modal config"
        );
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ModalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build props for a render with the given visibility
    pub fn into_props(self, visible: bool) -> ModalProps {
        ModalProps {
            visible,
            no_animation: self.no_animation,
            animation_type: self.animation_type,
            card_position: self.card_position,
            edge_offset: self.edge_offset,
            duration_ms: self.duration_ms,
            use_native_driver: self.use_native_driver,
            backdrop: self.backdrop,
            ..ModalProps::default()
        }
    }
}
