use notesheet_engine::{PageGeometry, PaperStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pen color {0:?}: expected #rrggbb")]
    InvalidPenColor(String),
}

/// A handwriting font with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub name: &'static str,
    pub label: &'static str,
}

/// An ink color with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FONTS: [FontPreset; 7] = [
    FontPreset {
        name: "Caveat",
        label: "Casual Handwriting",
    },
    FontPreset {
        name: "Homemade Apple",
        label: "Neat Handwriting",
    },
    FontPreset {
        name: "Reenie Beanie",
        label: "Quick Notes",
    },
    FontPreset {
        name: "Rock Salt",
        label: "Blocky Letters",
    },
    FontPreset {
        name: "Indie Flower",
        label: "School Notes",
    },
    FontPreset {
        name: "Dancing Script",
        label: "Elegant Script",
    },
    FontPreset {
        name: "Kalam",
        label: "Natural Notes",
    },
];

pub const COLORS: [ColorPreset; 6] = [
    ColorPreset {
        value: "#2563eb",
        label: "Blue",
    },
    ColorPreset {
        value: "#000000",
        label: "Black",
    },
    ColorPreset {
        value: "#dc2626",
        label: "Red",
    },
    ColorPreset {
        value: "#65a30d",
        label: "Green",
    },
    ColorPreset {
        value: "#7c3aed",
        label: "Purple",
    },
    ColorPreset {
        value: "#9f1239",
        label: "Burgundy",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pen {
    pub font: String,
    pub color: String,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            font: FONTS[0].name.to_string(),
            color: COLORS[0].value.to_string(),
        }
    }
}

impl Pen {
    /// Colors must be `#rrggbb`. Fonts are free-form: any installed font
    /// may be named, not only the presets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hex = self.color.strip_prefix('#').unwrap_or_default();
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidPenColor(self.color.clone()))
        }
    }

    /// Display label of the pen's color, if it is a preset.
    pub fn color_label(&self) -> Option<&'static str> {
        COLORS
            .iter()
            .find(|c| c.value.eq_ignore_ascii_case(&self.color))
            .map(|c| c.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note opened when no file is given on the command line.
    pub document_path: Option<PathBuf>,
    pub paper_style: PaperStyle,
    pub pen: Pen,
    pub geometry: PageGeometry,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.pen.validate()?;

        // Expand shell variables and tilde in the loaded document path
        config.document_path = config
            .document_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/notesheet");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
