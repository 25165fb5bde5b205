//! Game settings from the config file and command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hanoi::{BackgroundClick, DEFAULT_DISKS, DiskCount, LayoutMetrics};
use tracing::{debug, info, instrument};

/// Largest value any layout override may take, in cells.
pub const MAX_LAYOUT_CELLS: i32 = 1_000;

/// Contents of `strictly_hanoi.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Disk count for the first session.
    pub disks: u8,
    /// Ring the terminal bell for sound effects.
    pub sound: bool,
    /// What a click outside every peg does to a selection.
    pub background_click: BackgroundClick,
    /// Log file path.
    pub log_file: PathBuf,
    /// Board geometry overrides, in terminal cells.
    pub layout: Option<LayoutConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            disks: DEFAULT_DISKS,
            sound: true,
            background_click: BackgroundClick::default(),
            log_file: PathBuf::from("strictly_hanoi.log"),
            layout: None,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(disks = config.disks, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if present, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Optional overrides for the cell layout.
///
/// Disk widths must stay odd so each disk centres on its peg, hence an odd
/// initial width and an even increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the smallest disk.
    pub disk_width_initial: Option<i32>,
    /// Extra width per disk size step.
    pub disk_width_increment: Option<i32>,
    /// Columns between neighbouring pegs.
    pub disk_horizontal_space: Option<i32>,
    /// Rows between stacked disks.
    pub disk_vertical_space: Option<i32>,
    /// Shaft rows above a full stack.
    pub peg_padding_top: Option<i32>,
    /// Shaft rows below the bottom disk.
    pub peg_padding_bottom: Option<i32>,
}

impl LayoutConfig {
    /// Applies the overrides on top of `base`.
    ///
    /// Every override must lie within `0..=MAX_LAYOUT_CELLS`, which keeps the
    /// geometry of a full ten-disk board well inside terminal coordinates.
    pub fn apply(&self, base: LayoutMetrics) -> Result<LayoutMetrics, ConfigError> {
        let metrics = LayoutMetrics {
            disk_width_initial: self.disk_width_initial.unwrap_or(base.disk_width_initial),
            disk_width_increment: self.disk_width_increment.unwrap_or(base.disk_width_increment),
            disk_horizontal_space: self
                .disk_horizontal_space
                .unwrap_or(base.disk_horizontal_space),
            disk_vertical_space: self.disk_vertical_space.unwrap_or(base.disk_vertical_space),
            peg_padding_top: self.peg_padding_top.unwrap_or(base.peg_padding_top),
            peg_padding_bottom: self.peg_padding_bottom.unwrap_or(base.peg_padding_bottom),
            ..base
        };

        let overrides = [
            ("disk_width_initial", self.disk_width_initial),
            ("disk_width_increment", self.disk_width_increment),
            ("disk_horizontal_space", self.disk_horizontal_space),
            ("disk_vertical_space", self.disk_vertical_space),
            ("peg_padding_top", self.peg_padding_top),
            ("peg_padding_bottom", self.peg_padding_bottom),
        ];
        if let Some((key, Some(value))) = overrides
            .iter()
            .find(|(_, value)| value.is_some_and(|v| v > MAX_LAYOUT_CELLS))
        {
            return Err(ConfigError::new(format!(
                "layout.{} must be at most {}, got {}",
                key, MAX_LAYOUT_CELLS, value
            )));
        }

        if metrics.disk_width_initial < 1 || metrics.disk_width_initial % 2 == 0 {
            return Err(ConfigError::new(format!(
                "layout.disk_width_initial must be odd and positive, got {}",
                metrics.disk_width_initial
            )));
        }
        if metrics.disk_width_increment < 0 || metrics.disk_width_increment % 2 != 0 {
            return Err(ConfigError::new(format!(
                "layout.disk_width_increment must be even and non-negative, got {}",
                metrics.disk_width_increment
            )));
        }
        let spacing = [
            ("disk_horizontal_space", metrics.disk_horizontal_space),
            ("disk_vertical_space", metrics.disk_vertical_space),
            ("peg_padding_top", metrics.peg_padding_top),
            ("peg_padding_bottom", metrics.peg_padding_bottom),
        ];
        if let Some((key, value)) = spacing.iter().find(|(_, value)| *value < 0) {
            return Err(ConfigError::new(format!(
                "layout.{} must be non-negative, got {}",
                key, value
            )));
        }
        Ok(metrics)
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Disk count for the first session.
    disks: DiskCount,
    /// Ring the terminal bell for sound effects.
    sound: bool,
    /// What a click outside every peg does to a selection.
    background_click: BackgroundClick,
    /// Log file path.
    log_file: PathBuf,
    /// Board geometry in terminal cells.
    metrics: LayoutMetrics,
}

impl Settings {
    /// Merges the config file with command-line flags, flags winning.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = FileConfig::load_or_default(&cli.config)?;
        Self::merge(file, cli)
    }

    fn merge(file: FileConfig, cli: &Cli) -> Result<Self, ConfigError> {
        let requested = cli.disks.unwrap_or(file.disks);
        let disks = DiskCount::new(requested).map_err(|e| ConfigError::new(e.to_string()))?;

        let metrics = match file.layout {
            Some(layout) => layout.apply(LayoutMetrics::cells())?,
            None => LayoutMetrics::cells(),
        };

        Ok(Self {
            disks,
            sound: file.sound && !cli.mute,
            background_click: cli.background_click.unwrap_or(file.background_click),
            log_file: cli.log_file.clone().unwrap_or(file.log_file),
            metrics,
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
