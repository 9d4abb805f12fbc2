use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Crockford;
use crate::encoders::algorithms::errors::{
    AlphabetNotFoundError, RegistryError, find_closest_alphabet,
};

const CONFIG_FILE: &str = "alphabets.toml";
const CONFIG_DIR: &str = "crockford-base32";
const DEFAULT_ALPHABET: &str = "crockford";

/// Errors from reading an alphabet configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse alphabet configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 32 canonical symbols, in value order
    pub chars: String,
    /// Free-form note shown to users
    #[serde(default)]
    pub description: Option<String>,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used by [`AlphabetRegistry::default_codec`]; `crockford` if unset
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../alphabets.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            alphabets = registry.alphabets.len(),
            "loaded alphabet configuration"
        );
        Ok(registry)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/crockford-base32/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// An override file that fails to load is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        config.merge_file(Path::new(CONFIG_FILE));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => self.merge(overrides),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring alphabet configuration");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`,
    /// and a default set in `other` replaces ours.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a codec for the named alphabet.
    ///
    /// # Errors
    ///
    /// Fails if the name is unknown (with a suggestion for near misses) or
    /// the configured symbols do not form a valid alphabet.
    pub fn codec(&self, name: &str) -> Result<Crockford, RegistryError> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, self.alphabets.keys().map(String::as_str));
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        Crockford::with_alphabet(&config.chars).map_err(|source| RegistryError::InvalidAlphabet {
            name: name.to_string(),
            source,
        })
    }

    /// Builds a codec for the configured default alphabet.
    ///
    /// Falls back to the canonical alphabet when no default is configured
    /// and no `crockford` entry exists.
    pub fn default_codec(&self) -> Result<Crockford, RegistryError> {
        match self.settings.default_alphabet.as_deref() {
            Some(name) => self.codec(name),
            None if self.alphabets.contains_key(DEFAULT_ALPHABET) => self.codec(DEFAULT_ALPHABET),
            None => Ok(Crockford::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::CROCKFORD_ALPHABET;
    use crate::encoders::algorithms::errors::AlphabetError;

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.names(), ["crockford", "rfc4648", "rfc4648_hex"]);
        assert_eq!(config.settings.default_alphabet.as_deref(), Some("crockford"));
    }

    #[test]
    fn test_builtin_alphabets_are_valid() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in config.names() {
            assert!(config.codec(name).is_ok(), "{name} should be valid");
        }
        let crockford = config.get_alphabet("crockford").unwrap();
        assert_eq!(crockford.chars, CROCKFORD_ALPHABET);
    }

    #[test]
    fn test_default_codec() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.default_codec().unwrap(), Crockford::new());

        let empty = AlphabetRegistry::default();
        assert_eq!(empty.default_codec().unwrap(), Crockford::new());
    }

    #[test]
    fn test_unknown_alphabet_suggests_closest() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(
            config.codec("crokford"),
            Err(RegistryError::NotFound(AlphabetNotFoundError::new(
                "crokford",
                Some("crockford".to_string())
            )))
        );
        assert!(matches!(
            config.codec("zbase32"),
            Err(RegistryError::NotFound(AlphabetNotFoundError { suggestion: None, .. }))
        ));
    }

    #[test]
    fn test_invalid_alphabet_in_config() {
        let config = AlphabetRegistry::from_toml(
            r#"
            [alphabets.short]
            chars = "0123456789"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.codec("short"),
            Err(RegistryError::InvalidAlphabet {
                name: "short".to_string(),
                source: AlphabetError::InvalidLength { actual: 10 },
            })
        );
    }

    #[test]
    fn test_merge_overrides() {
        let mut config = AlphabetRegistry::load_default().unwrap();
        let overrides = AlphabetRegistry::from_toml(
            r#"
            [settings]
            default_alphabet = "hex"

            [alphabets.hex]
            chars = "0123456789ABCDEFGHIJKLMNOPQRSTUV"

            [alphabets.crockford]
            chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"
            "#,
        )
        .unwrap();

        config.merge(overrides);

        assert_eq!(config.names().len(), 4);
        assert_eq!(
            config.get_alphabet("crockford").unwrap().chars,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"
        );
        let codec = config.default_codec().unwrap();
        assert_eq!(codec.encode_integer(31).unwrap(), "V");
    }

    #[test]
    fn test_merge_keeps_default_when_unset() {
        let mut config = AlphabetRegistry::load_default().unwrap();
        config.merge(AlphabetRegistry::default());
        assert_eq!(config.settings.default_alphabet.as_deref(), Some("crockford"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            AlphabetRegistry::from_toml("[alphabets.broken]\nchars = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AlphabetRegistry::load_from_file(Path::new("/nonexistent/alphabets.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/alphabets.toml"));
    }
}
