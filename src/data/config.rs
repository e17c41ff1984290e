use crate::data::gradient_config::DEFAULT_VOLUME_COLORS;
use crate::render::color::Rgb;
use crate::render::volume_sprite::SoundGeometry;
use crate::ui::components::range_control::Orientation;
use crate::ui::components::seek_slider::SeekPalette;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_ENV: &str = "MEDIA_SLIDERS_CONFIG_DIR";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub ui_fps: u32,
    pub seek: SeekConfig,
    pub volume: VolumeConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekConfig {
    pub orientation: Orientation,
    /// Track color, `#rrggbb`.
    pub background: String,
    /// Elapsed-part color, `#rrggbb`.
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Wheel step in raw volume units out of 512.
    pub step: i32,
    /// Let the slider go to 400% instead of 200%.
    pub extended_range: bool,
    /// `r;g;b` for each of the four gradient stops.
    pub colors: String,
    pub geometry: SoundGeometry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub duration_secs: u64,
    pub start_playing: bool,
    pub volume: i32,
    pub muted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "mocha".to_string(),
            ui_fps: 60,
            seek: SeekConfig::default(),
            volume: VolumeConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for SeekConfig {
    fn default() -> Self {
        let p = SeekPalette::default();
        Self {
            orientation: Orientation::Horizontal,
            background: to_hex(p.background),
            foreground: to_hex(p.foreground),
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            step: 32,
            extended_range: false,
            colors: DEFAULT_VOLUME_COLORS.to_string(),
            geometry: SoundGeometry::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_secs: 215,
            start_playing: true,
            volume: 100,
            muted: false,
        }
    }
}

impl SeekConfig {
    pub fn palette(&self) -> SeekPalette {
        let d = SeekPalette::default();
        SeekPalette {
            background: parse_hex(&self.background).unwrap_or(d.background),
            foreground: parse_hex(&self.foreground).unwrap_or(d.foreground),
            ..d
        }
    }
}

impl Config {
    /// Read the config file, falling back to defaults when it is missing or broken.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::info!("no config directory; using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Some(PathBuf::from(dir).join(CONFIG_FILE));
            }
        }
        BaseDirs::new().map(|d| d.config_dir().join("media-sliders").join(CONFIG_FILE))
    }
}

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(s.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(s.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(s.get(4..6)?, 16).ok()?;
    Some(Rgb(r, g, b))
}

fn to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.0, c.1, c.2)
}
