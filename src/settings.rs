//! Game settings and preferences
//!
//! Persisted as a JSON file next to the binary. Gameplay constants live in
//! `consts`; only things a player or tester would actually change go here.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DIPPID_PORT, TICK_HZ};
use crate::sim::ControlMode;

/// Runtime configuration for the native runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input strategy
    pub control: ControlMode,
    /// UDP port the DIPPID feed listens on
    pub sensor_port: u16,
    /// Ticks per second the runner paces to
    pub tick_hz: u32,
    /// Fixed seed for reproducible runs; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlMode::default(),
            sensor_port: DIPPID_PORT,
            tick_hz: TICK_HZ,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the file
    /// is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}
