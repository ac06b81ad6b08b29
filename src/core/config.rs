use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::codec::AlphabetCodec;
use crate::encoders::algorithms::errors::{CodecNotFoundError, ConfigError, find_closest_codec};

/// Configuration for a single codec loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// The canonical alphabet, in symbol order
    pub chars: String,
    /// Synonym specs, each anchored on an already decodable character
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Characters skipped while decoding
    #[serde(default)]
    pub ignore: String,
}

impl CodecConfig {
    /// Builds the codec, applying synonyms in order and then the ignore set.
    pub fn build(&self) -> Result<AlphabetCodec, ConfigError> {
        let mut builder = AlphabetCodec::builder(&self.chars)?;
        for spec in &self.synonyms {
            builder = builder.synonyms(spec)?;
        }
        Ok(builder.ignore(&self.ignore)?.build())
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Codec used when the caller does not name one
    #[serde(default)]
    pub default_codec: Option<String>,
}

/// Collection of codec configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    #[serde(default)]
    pub codecs: HashMap<String, CodecConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses codec configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the codecs bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in codecs (from library)
    /// 2. `~/.config/ascii-codec/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching codec names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths = Vec::with_capacity(2);
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("ascii-codec").join("codecs.toml"));
        }
        paths.push(PathBuf::from("codecs.toml"));

        Self::load_with_overrides_from(&paths)
    }

    /// Loads the built-in codecs, then merges each existing file in `paths`
    /// in order.
    ///
    /// Files that fail to load are reported on stderr and skipped.
    pub fn load_with_overrides_from<P: AsRef<Path>>(
        paths: &[P],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;
        for path in paths {
            config.merge_file(path.as_ref());
        }
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => self.merge(overrides),
            Err(e) => {
                eprintln!("Warning: Failed to load codec config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Codecs from `other` replace codecs with the same name in `self`; a
    /// default codec set in `other` wins.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
    }

    /// Retrieves a codec configuration by name.
    pub fn get_codec_config(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// Builds the named codec.
    ///
    /// Unknown names fail with [`CodecNotFoundError`], carrying the closest
    /// known name as a suggestion.
    pub fn codec(&self, name: &str) -> Result<AlphabetCodec, Box<dyn std::error::Error>> {
        let config = self.get_codec_config(name).ok_or_else(|| {
            CodecNotFoundError::new(name, find_closest_codec(name, &self.names()))
        })?;
        Ok(config.build()?)
    }

    /// Builds the codec named by `settings.default_codec`.
    pub fn default_codec(&self) -> Result<AlphabetCodec, Box<dyn std::error::Error>> {
        let name = self
            .settings
            .default_codec
            .as_deref()
            .ok_or("no default codec configured")?;
        self.codec(name)
    }

    /// Sorted codec names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.codecs.keys().cloned().collect();
        names.sort();
        names
    }
}
