//! Tunable thresholds and feature switches, persisted as JSON.

use std::{io::Write, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// The default touch slop in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;
/// The default delay before a stationary press becomes a long-press.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Thresholds used by the gesture state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// The distance a pointer may travel before it no longer counts as stationary.
    pub touch_slop: f32,
    /// How long a press must be held before it becomes a long-press.
    pub long_press_timeout_ms: u64,
    /// Swipes may only start from an x-coordinate strictly greater than this bound,
    /// which keeps the leftmost edge free for the host's back-navigation swipe.
    pub slide_back_bound: f32,
}
impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            slide_back_bound: 0.0,
        }
    }
}

/// Feature switches used by the action menu resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// If `true`, messages with replies offer "View Replies/Comments";
    /// otherwise channel posts with a thread offer "Discuss".
    pub comments_supported: bool,
    /// Allow stickers that don't belong to any set to be added to favorites.
    pub favorite_stickers_without_sets: bool,
}
impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            comments_supported: true,
            favorite_stickers_without_sets: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub resolver: ResolverConfig,
}

impl Config {
    /// Loads the config from the JSON file at `path`.
    ///
    /// A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config found at {path:?}, using defaults.");
                return Ok(Self::default());
            }
            Err(source) => return Err(Error::ConfigIo { path: path.to_owned(), source }),
        };
        let config = serde_json::from_slice(&bytes)
            .map_err(|source| Error::ConfigParse { path: path.to_owned(), source })?;
        debug!("Loaded config from {path:?}: {config:?}");
        Ok(config)
    }

    /// Saves this config as JSON to the file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|source| Error::ConfigIo { path: path.to_owned(), source })?;
        self.write_to(std::io::BufWriter::new(file), path)?;
        debug!("Saved config to {path:?}");
        Ok(())
    }

    /// Writes this config as JSON to `writer`. `path` only labels errors.
    fn write_to(&self, mut writer: impl Write, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| Error::ConfigIo { path: path.to_owned(), source };
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            if e.is_io() {
                io_err(e.into())
            } else {
                Error::ConfigSerialize { path: path.to_owned(), source: e }
            }
        })?;
        writer.flush().map_err(io_err)
    }
}
