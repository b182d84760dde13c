//! Configuration file loading with precedence handling.

use crate::carousel::{CarouselController, DepthCurve, RotationMode, ScrollScale};
use crate::model::{CarouselError, GeometryConfig};
use crate::scroll::smoothing::{DEFAULT_LERP_FACTOR, DEFAULT_SNAP_DISTANCE};
use crate::scroll::{ScrollStateMachine, Smoothing};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CAROUSEL_CONFIG";

/// Environment variable overriding the rotation mode.
pub const MODE_ENV_VAR: &str = "CAROUSEL_MODE";

/// Default scroll period ("set height") in scroll units.
pub const DEFAULT_PERIOD: f64 = 1000.0;

/// Default maximum for the linear depth curve when none is given.
pub const DEFAULT_LINEAR_MAX_DEPTH: f64 = 1.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every field is optional; anything missing falls back to the defaults in
/// [`ResolvedConfig::default`]. Corresponds to `~/.config/carousel/config.toml`:
///
/// ```toml
/// log_file_path = "/tmp/carousel.log"
///
/// [geometry]
/// column_count = 16
/// column_width = 320.0
/// gap = 40.0
/// radius = 1800.0
/// visible_arc = 60.0
///
/// [scroll]
/// period = 1000.0
/// mode = "clamped"
/// lerp_factor = 0.15
///
/// [depth]
/// curve = "linear"
/// max_depth = 400.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Layout constants.
    #[serde(default)]
    pub geometry: Option<GeometrySection>,

    /// Scroll axis and rotation mapping.
    #[serde(default)]
    pub scroll: Option<ScrollSection>,

    /// Depth curve.
    #[serde(default)]
    pub depth: Option<DepthSection>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// `[geometry]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeometrySection {
    /// Number of columns on the ring.
    #[serde(default)]
    pub column_count: Option<usize>,
    /// Width of one column.
    #[serde(default)]
    pub column_width: Option<f64>,
    /// Gap between columns.
    #[serde(default)]
    pub gap: Option<f64>,
    /// Cylinder radius.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Visible arc in degrees.
    #[serde(default)]
    pub visible_arc: Option<f64>,
}

/// `[scroll]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScrollSection {
    /// Length of one content loop.
    #[serde(default)]
    pub period: Option<f64>,
    /// Fixed degrees per scroll unit; absent means one period spans the ring.
    #[serde(default)]
    pub degrees_per_unit: Option<f64>,
    /// `"free"` or `"clamped"`.
    #[serde(default)]
    pub mode: Option<RotationMode>,
    /// Fraction of remaining distance covered per 60 Hz frame.
    #[serde(default)]
    pub lerp_factor: Option<f64>,
    /// Remaining distance at which current snaps onto target.
    #[serde(default)]
    pub snap_distance: Option<f64>,
}

/// Depth curve names accepted in `[depth] curve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthCurveKind {
    /// `radius * (1 - cos|angle|)`.
    Cylinder,
    /// `|angle| / 180 * max_depth`.
    Linear,
}

/// `[depth]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DepthSection {
    /// Which curve to use.
    #[serde(default)]
    pub curve: Option<DepthCurveKind>,
    /// Maximum depth for the linear curve.
    #[serde(default)]
    pub max_depth: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. Values
/// are not validated until [`ResolvedConfig::build_controller`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Layout constants.
    pub geometry: GeometryConfig,
    /// Scroll period.
    pub period: f64,
    /// Scroll-to-degrees mapping.
    pub scale: ScrollScale,
    /// Free or clamped rotation.
    pub mode: RotationMode,
    /// Smoothing lerp factor.
    pub lerp_factor: f64,
    /// Smoothing snap distance.
    pub snap_distance: f64,
    /// Depth curve.
    pub depth_curve: DepthCurve,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            period: DEFAULT_PERIOD,
            scale: ScrollScale::default(),
            mode: RotationMode::default(),
            lerp_factor: DEFAULT_LERP_FACTOR,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            depth_curve: DepthCurve::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate every setting and build a configured controller.
    ///
    /// # Errors
    /// The first invalid geometry, period, scale, smoothing or depth value.
    pub fn build_controller(&self) -> Result<CarouselController, CarouselError> {
        let smoothing = Smoothing::new(self.lerp_factor, self.snap_distance)?;
        let scroll = ScrollStateMachine::new(self.period)?;

        let mut controller = CarouselController::new(scroll)
            .with_rotation_mode(self.mode)
            .with_smoothing(smoothing)
            .with_scroll_scale(self.scale)?
            .with_depth_curve(self.depth_curve)?;
        controller.configure(self.geometry)?;
        Ok(controller)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/carousel/carousel.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("carousel").join("carousel.log")
    } else {
        PathBuf::from("carousel.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/carousel/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carousel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CAROUSEL_CONFIG` environment variable
/// 3. Default path `~/.config/carousel/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let geometry = config.geometry.unwrap_or_default();
    let scroll = config.scroll.unwrap_or_default();
    let depth = config.depth.unwrap_or_default();

    let depth_curve = match depth.curve {
        Some(DepthCurveKind::Cylinder) => DepthCurve::Cylinder,
        Some(DepthCurveKind::Linear) => DepthCurve::Linear {
            max_depth: depth.max_depth.unwrap_or(DEFAULT_LINEAR_MAX_DEPTH),
        },
        None => defaults.depth_curve,
    };

    ResolvedConfig {
        geometry: GeometryConfig {
            column_count: geometry
                .column_count
                .unwrap_or(defaults.geometry.column_count),
            column_width: geometry
                .column_width
                .unwrap_or(defaults.geometry.column_width),
            gap: geometry.gap.unwrap_or(defaults.geometry.gap),
            radius: geometry.radius.unwrap_or(defaults.geometry.radius),
            visible_arc: geometry
                .visible_arc
                .unwrap_or(defaults.geometry.visible_arc),
        },
        period: scroll.period.unwrap_or(defaults.period),
        scale: scroll
            .degrees_per_unit
            .map(ScrollScale::DegreesPerUnit)
            .unwrap_or(defaults.scale),
        mode: scroll.mode.unwrap_or(defaults.mode),
        lerp_factor: scroll.lerp_factor.unwrap_or(defaults.lerp_factor),
        snap_distance: scroll.snap_distance.unwrap_or(defaults.snap_distance),
        depth_curve,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAROUSEL_MODE`: Override rotation mode (`free` / `clamped`)
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(MODE_ENV_VAR) {
        match raw.parse::<RotationMode>() {
            Ok(mode) => config.mode = mode,
            Err(reason) => warn!(%reason, "Ignoring {}", MODE_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    mode_override: Option<RotationMode>,
    columns_override: Option<usize>,
    period_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(mode) = mode_override {
        config.mode = mode;
    }

    if let Some(columns) = columns_override {
        config.geometry.column_count = columns;
    }

    if let Some(period) = period_override {
        config.period = period;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
