use super::dictionary::{Dictionary, DictionaryError};
use crate::encoders::algorithms::errors::{DictionaryNotFoundError, find_closest_dictionary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration for a single dictionary loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DictionaryConfig {
    /// The characters comprising the dictionary, in digit order
    pub chars: String,
    /// Optional padding character (e.g., "=")
    #[serde(default)]
    pub padding: Option<String>,
    /// Accept lowercase and uppercase alike on decode
    #[serde(default)]
    pub case_insensitive: bool,
    /// Render `+`/`/` as `-`/`_`
    #[serde(default)]
    pub url_safe: bool,
    /// Whether the general encoder appends padding (default: true)
    #[serde(default = "default_true")]
    pub pad_output: bool,
}

fn default_true() -> bool {
    true
}

impl DictionaryConfig {
    /// Validates the configuration and builds the dictionary.
    pub fn build(&self) -> Result<Dictionary, DictionaryError> {
        let mut builder = Dictionary::builder()
            .chars_from_str(&self.chars)
            .case_insensitive(self.case_insensitive)
            .url_safe(self.url_safe)
            .pad_output(self.pad_output);

        if let Some(padding) = &self.padding {
            let mut chars = padding.chars();
            match (chars.next(), chars.next()) {
                (Some(pad), None) => builder = builder.padding(pad),
                _ => return Err(DictionaryError::InvalidPadding(padding.clone())),
            }
        }

        builder.build()
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Dictionary used when `--dictionary` is not given
    #[serde(default)]
    pub default_dictionary: Option<String>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl Settings {
    /// Overlays the values that `other` sets.
    pub fn merge(&mut self, other: Settings) {
        if other.default_dictionary.is_some() {
            self.default_dictionary = other.default_dictionary;
        }
        if other.max_size.is_some() {
            self.max_size = other.max_size;
        }
    }
}

/// Shape of a user config file. Only `[settings]` may be overridden; any
/// `[dictionaries]` table is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    settings: Settings,
}

/// The built-in dictionaries plus effective settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DictionaryRegistry {
    /// Map of dictionary names to their configurations
    pub dictionaries: BTreeMap<String, DictionaryConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl DictionaryRegistry {
    /// Parses dictionary configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in dictionary configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../dictionaries.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Reads a settings override file.
    pub fn load_settings_file(path: &Path) -> Result<Settings, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&content)?;
        Ok(file.settings)
    }

    /// Standard override locations, lowest priority first.
    ///
    /// 1. `~/.config/base-pack/config.toml`
    /// 2. `./base-pack.toml`
    pub fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("base-pack").join("config.toml"));
        }
        paths.push(PathBuf::from("base-pack.toml"));
        paths
    }

    /// Loads the built-in configuration with settings overrides applied.
    ///
    /// Standard locations that exist but fail to load are skipped and
    /// reported in the returned warnings. An `explicit` path is applied last
    /// and must load.
    pub fn load_with_overrides(
        explicit: Option<&Path>,
    ) -> Result<(Self, Vec<String>), Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;
        let mut warnings = Vec::new();

        for path in Self::override_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_settings_file(&path) {
                Ok(settings) => config.settings.merge(settings),
                Err(e) => warnings.push(format!("failed to load config from {:?}: {}", path, e)),
            }
        }

        if let Some(path) = explicit {
            let settings = Self::load_settings_file(path)
                .map_err(|e| format!("cannot load config {:?}: {}", path, e))?;
            config.settings.merge(settings);
        }

        Ok((config, warnings))
    }

    /// Retrieves a dictionary configuration by name.
    pub fn get_dictionary(&self, name: &str) -> Option<&DictionaryConfig> {
        self.dictionaries.get(name)
    }

    /// Sorted dictionary names.
    pub fn names(&self) -> Vec<String> {
        self.dictionaries.keys().cloned().collect()
    }

    /// Builds the named dictionary, suggesting a close name when it is unknown.
    pub fn build(&self, name: &str) -> Result<Dictionary, Box<dyn std::error::Error>> {
        let dictionary_config = self.get_dictionary(name).ok_or_else(|| {
            let suggestion = find_closest_dictionary(name, &self.names());
            DictionaryNotFoundError::new(name, suggestion)
        })?;
        Ok(dictionary_config.build()?)
    }

    /// Name to use when none is given explicitly.
    pub fn default_dictionary(&self) -> &str {
        self.settings
            .default_dictionary
            .as_deref()
            .unwrap_or("base64url")
    }
}
