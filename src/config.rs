// Optional TOML settings. Every key has a default, so an empty file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::color::{color_from_hex_string, Color, DEFAULT_PALETTE, PAPER};
use crate::error::Error;

/// Largest blank canvas side, in pixels.
pub const MAX_CANVAS_SIDE: usize = 16_384;

/// Raw file contents, colors still as strings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    width: usize,
    height: usize,
    paper: String,
    backdrop: String,
    palette: Vec<String>,
    zoom_min: f32,
    zoom_max: f32,
    zoom_step: f32,
    export_path: PathBuf,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            paper: PAPER.to_string(),
            backdrop: "#404040".into(),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            zoom_min: 0.5,
            zoom_max: 3.0,
            zoom_step: 0.1,
            export_path: PathBuf::from("my-drawing.png"),
        }
    }
}

/// Validated settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Blank canvas size when no line art is given.
    pub width: usize,
    pub height: usize,
    /// Color transparent pixels are shown over.
    pub paper: Color,
    /// Window area outside the canvas (zoomed out).
    pub backdrop: Color,
    /// Swatches for keys 1..=9.
    pub palette: Vec<Color>,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,
    pub export_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        // The built-in defaults always validate.
        let raw = RawConfig::default();
        Self {
            width: raw.width,
            height: raw.height,
            paper: PAPER,
            backdrop: Color::rgb(0x40, 0x40, 0x40),
            palette: DEFAULT_PALETTE
                .iter()
                .filter_map(|s| color_from_hex_string(s).ok())
                .collect(),
            zoom_min: raw.zoom_min,
            zoom_max: raw.zoom_max,
            zoom_step: raw.zoom_step,
            export_path: raw.export_path,
        }
    }
}

impl Config {
    /// Read `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let raw: RawConfig = toml::from_str(&text)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
        let config = Self::from_raw(raw)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let raw: RawConfig = toml::from_str(text)
            .map_err(|source| Error::Config { path: PathBuf::from("<inline>"), source })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, Error> {
        if raw.width == 0 || raw.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas size must be non-zero, got {}x{}",
                raw.width, raw.height
            )));
        }
        let bytes = raw.width.checked_mul(raw.height).and_then(|n| n.checked_mul(4));
        if raw.width > MAX_CANVAS_SIDE || raw.height > MAX_CANVAS_SIDE || bytes.is_none() {
            return Err(Error::InvalidConfig(format!(
                "canvas size {}x{} exceeds {}x{}",
                raw.width, raw.height, MAX_CANVAS_SIDE, MAX_CANVAS_SIDE
            )));
        }
        if !(raw.zoom_min > 0.0 && raw.zoom_min <= raw.zoom_max) {
            return Err(Error::InvalidConfig(format!(
                "zoom range [{}, {}] is empty or non-positive",
                raw.zoom_min, raw.zoom_max
            )));
        }
        if !(raw.zoom_step > 0.0) {
            return Err(Error::InvalidConfig(format!("zoom_step must be positive, got {}", raw.zoom_step)));
        }
        if raw.palette.is_empty() || raw.palette.len() > 9 {
            return Err(Error::InvalidConfig(format!(
                "palette needs 1 to 9 colors, got {}",
                raw.palette.len()
            )));
        }

        let palette = raw
            .palette
            .iter()
            .map(|s| color_from_hex_string(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width: raw.width,
            height: raw.height,
            paper: color_from_hex_string(&raw.paper)?,
            backdrop: color_from_hex_string(&raw.backdrop)?,
            palette,
            zoom_min: raw.zoom_min,
            zoom_max: raw.zoom_max,
            zoom_step: raw.zoom_step,
            export_path: raw.export_path,
        })
    }
}
