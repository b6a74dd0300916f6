//! Mask configuration persistence
//!
//! Stores the default mask in `~/.config/maskedit/config.yaml`, or in the
//! file named by `--config` / `$MASKEDIT_CONFIG`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mask::{
    AdvancePolicy, MaskController, MaskError, Template, DEFAULT_PLACEHOLDER, DEFAULT_SLOT_MARKER,
};

/// Construction-time settings for a masked field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Mask string, slots written as `slot_marker`
    #[serde(default = "default_mask")]
    pub mask: String,

    #[serde(default = "default_slot_marker")]
    pub slot_marker: char,

    /// Shown in empty slots
    #[serde(default = "default_placeholder")]
    pub placeholder: char,

    /// Only ASCII digits may be typed into slots
    #[serde(default = "default_digits_only")]
    pub digits_only: bool,

    /// What happens after the last slot is filled
    #[serde(default)]
    pub advance_policy: AdvancePolicy,
}

fn default_mask() -> String {
    "+1 (XXX) XXX-XXXX".to_string()
}

fn default_slot_marker() -> char {
    DEFAULT_SLOT_MARKER
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

fn default_digits_only() -> bool {
    true
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask: default_mask(),
            slot_marker: default_slot_marker(),
            placeholder: default_placeholder(),
            digits_only: default_digits_only(),
            advance_policy: AdvancePolicy::default(),
        }
    }
}

impl MaskConfig {
    /// Load config from `explicit`, `$MASKEDIT_CONFIG` or the default location,
    /// falling back to defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = crate::config_paths::resolve_config_file(explicit) else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Invalid mask config: {}", e))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn build_template(&self) -> Result<Template, MaskError> {
        let template = Template::parse(&self.mask, self.slot_marker, self.placeholder)?;
        Ok(if self.digits_only {
            template.digits_only()
        } else {
            template
        })
    }

    pub fn build_controller(&self) -> Result<MaskController, MaskError> {
        Ok(MaskController::new(self.build_template()?).with_policy(self.advance_policy))
    }
}
