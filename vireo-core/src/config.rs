use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vireo_model::AspectMode;

use crate::constants::seeking;
use crate::error::{CoreError, Result};

/// The class of device a shell is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Phone,
    Tablet,
    Television,
    Desktop,
}

impl FormFactor {
    pub fn is_touch(&self) -> bool {
        matches!(self, FormFactor::Phone | FormFactor::Tablet)
    }
}

impl std::str::FromStr for FormFactor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "phone" => Ok(FormFactor::Phone),
            "tablet" => Ok(FormFactor::Tablet),
            "television" => Ok(FormFactor::Television),
            "desktop" => Ok(FormFactor::Desktop),
            other => {
                Err(CoreError::Config(format!("unknown form factor: {other}")))
            }
        }
    }
}

/// Which optional transport controls a shell should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the aspect-ratio toggle is available at all.
    pub aspect_toggle: bool,
}

impl From<FormFactor> for Capabilities {
    fn from(form: FormFactor) -> Self {
        Capabilities {
            aspect_toggle: form.is_touch(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub form_factor: FormFactor,
    pub seek_step_secs: f64,
    pub hold_repeat_millis: u64,
    pub aspect: AspectMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            form_factor: FormFactor::Desktop,
            seek_step_secs: seeking::STEP_SECS,
            hold_repeat_millis: seeking::HOLD_REPEAT_MILLIS,
            aspect: AspectMode::Fit,
        }
    }
}

impl PlayerConfig {
    pub fn capabilities(&self) -> Capabilities {
        self.form_factor.into()
    }

    pub fn load() -> Self {
        // First check for environment variable
        let mut config = if let Ok(form) = form_factor_from_env() {
            Self {
                form_factor: form,
                ..Self::default()
            }
        } else {
            Self::default()
        };

        // Then load from config file (which can override env var)
        if let Some(path) = Self::default_path()
            && path.exists()
            && let Ok(loaded_config) = Self::load_from(&path)
        {
            config = loaded_config;
        }

        // Allow env var to override config file for the form factor
        if let Ok(form) = form_factor_from_env() {
            config.form_factor = form;
        }

        config
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::default_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vireo").join("player.json"))
    }
}

fn form_factor_from_env() -> Result<FormFactor> {
    let value = std::env::var("VIREO_FORM_FACTOR")
        .map_err(|_| CoreError::Config("VIREO_FORM_FACTOR unset".into()))?;
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_desktop_with_stock_seeking() {
        let config = PlayerConfig::default();
        assert_eq!(config.form_factor, FormFactor::Desktop);
        assert_eq!(config.seek_step_secs, seeking::STEP_SECS);
        assert_eq!(config.hold_repeat_millis, seeking::HOLD_REPEAT_MILLIS);
        assert_eq!(config.aspect, AspectMode::Fit);
    }

    #[test]
    fn touch_form_factors_unlock_the_aspect_toggle() {
        assert!(Capabilities::from(FormFactor::Phone).aspect_toggle);
        assert!(Capabilities::from(FormFactor::Tablet).aspect_toggle);
        assert!(!Capabilities::from(FormFactor::Television).aspect_toggle);
        assert!(!Capabilities::from(FormFactor::Desktop).aspect_toggle);
    }

    #[test]
    fn form_factor_parses_case_insensitively() {
        assert_eq!("phone".parse::<FormFactor>().unwrap(), FormFactor::Phone);
        assert_eq!(
            "Television".parse::<FormFactor>().unwrap(),
            FormFactor::Television
        );
        assert!("toaster".parse::<FormFactor>().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("player.json");

        let config = PlayerConfig {
            form_factor: FormFactor::Tablet,
            seek_step_secs: 10.0,
            hold_repeat_millis: 250,
            aspect: AspectMode::Fill,
        };
        config.save_to(&path).unwrap();

        let loaded = PlayerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PlayerConfig::load_from(&dir.path().join("nope.json")).is_err());
    }
}
