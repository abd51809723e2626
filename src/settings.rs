//! Display settings and preferences
//!
//! Gameplay rules are fixed; these only change how the game is shown.
//! Loaded from an optional JSON file, never written back.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Lowest frame cap accepted from a settings file
const MIN_FPS: u32 = 10;
/// Highest frame cap accepted from a settings file
const MAX_FPS: u32 = 240;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the faint background grid
    pub show_grid: bool,
    /// Show FPS counter under the score
    pub show_fps: bool,
    /// Hide the OS pointer over the window
    pub hide_cursor: bool,
    /// Frame-rate cap for presenting frames
    pub target_fps: u32,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_fps: false,
            hide_cursor: true,
            target_fps: 60,
            vsync: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        let clamped = settings.target_fps.clamp(MIN_FPS, MAX_FPS);
        if clamped != settings.target_fps {
            log::warn!(
                "target_fps {} out of range, using {}",
                settings.target_fps,
                clamped
            );
            settings.target_fps = clamped;
        }
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::SettingsIo(path.to_path_buf(), e))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Minimum time between presented frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
