use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::transition::easing::EasingType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Tuning knobs for the transition strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Grid wipe: overlay rows
    #[serde(default = "default_grid_rows")]
    pub grid_rows: usize,
    /// Grid wipe: overlay columns
    #[serde(default = "default_grid_cols")]
    pub grid_cols: usize,
    /// Grid wipe: window over which cell pop-ins are staggered, ms
    #[serde(default = "default_grid_stagger_ms")]
    pub grid_stagger_ms: u64,
    /// Grid wipe: hold after content swap before fade-out starts, ms
    #[serde(default = "default_grid_hold_ms")]
    pub grid_hold_ms: u64,
    /// Grid wipe: cell fade-out window, ms
    #[serde(default = "default_grid_fade_out_ms")]
    pub grid_fade_out_ms: u64,
    /// Cinematic zoom: scale-up duration, ms
    #[serde(default = "default_zoom_duration_ms")]
    pub zoom_duration_ms: u64,
    /// Cinematic zoom: scale factor reached at full zoom
    #[serde(default = "default_zoom_peak_scale")]
    pub zoom_peak_scale: f64,
    /// Cinematic zoom: overlay fade-out duration after the swap, ms
    #[serde(default = "default_zoom_fade_out_ms")]
    pub zoom_fade_out_ms: u64,
    /// Cinematic zoom: easing curve for the scale-up
    #[serde(default)]
    pub zoom_easing: EasingType,
    /// Mask reveal: progress points added per accepted wheel step
    #[serde(default = "default_mask_step")]
    pub mask_step: f64,
    /// Mask reveal: progress at or above which the reveal completes
    #[serde(default = "default_mask_complete_at")]
    pub mask_complete_at: f64,
    /// Mask reveal: progress at or below which a retracting reveal cancels
    #[serde(default = "default_mask_cancel_below")]
    pub mask_cancel_below: f64,
    /// Mask reveal: minimum gap between applied wheel steps, ms
    #[serde(default = "default_mask_throttle_ms")]
    pub mask_throttle_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            grid_rows: default_grid_rows(),
            grid_cols: default_grid_cols(),
            grid_stagger_ms: default_grid_stagger_ms(),
            grid_hold_ms: default_grid_hold_ms(),
            grid_fade_out_ms: default_grid_fade_out_ms(),
            zoom_duration_ms: default_zoom_duration_ms(),
            zoom_peak_scale: default_zoom_peak_scale(),
            zoom_fade_out_ms: default_zoom_fade_out_ms(),
            zoom_easing: EasingType::default(),
            mask_step: default_mask_step(),
            mask_complete_at: default_mask_complete_at(),
            mask_cancel_below: default_mask_cancel_below(),
            mask_throttle_ms: default_mask_throttle_ms(),
        }
    }
}

impl TransitionConfig {
    pub fn grid_cell_count(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    pub fn grid_stagger(&self) -> Duration {
        Duration::from_millis(self.grid_stagger_ms)
    }

    pub fn grid_hold(&self) -> Duration {
        Duration::from_millis(self.grid_hold_ms)
    }

    pub fn grid_fade_out(&self) -> Duration {
        Duration::from_millis(self.grid_fade_out_ms)
    }

    pub fn zoom_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_duration_ms)
    }

    pub fn zoom_fade_out(&self) -> Duration {
        Duration::from_millis(self.zoom_fade_out_ms)
    }

    pub fn mask_throttle(&self) -> Duration {
        Duration::from_millis(self.mask_throttle_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_animation_fps() -> u64 {
    60
}

fn default_grid_rows() -> usize {
    8
}

fn default_grid_cols() -> usize {
    12
}

fn default_grid_stagger_ms() -> u64 {
    500
}

fn default_grid_hold_ms() -> u64 {
    100
}

fn default_grid_fade_out_ms() -> u64 {
    500
}

fn default_zoom_duration_ms() -> u64 {
    1500
}

fn default_zoom_peak_scale() -> f64 {
    20.0
}

fn default_zoom_fade_out_ms() -> u64 {
    500
}

fn default_mask_step() -> f64 {
    4.0
}

fn default_mask_complete_at() -> f64 {
    50.0
}

fn default_mask_cancel_below() -> f64 {
    5.0
}

fn default_mask_throttle_ms() -> u64 {
    50
}

impl DeckConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrolldeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrolldeck")
            .join("config.toml")
    }
}
