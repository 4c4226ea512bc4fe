// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for pattern construction.
//!
//! A pattern file seeds a builder with document metadata, a musical
//! context, and output preferences. Files are YAML (`.yaml`/`.yml`) or
//! TOML (`.toml`); anything else is parsed as YAML.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pattern::{Metadata, DEFAULT_PROJECT};
use crate::timing::{MusicalContext, DEFAULT_BPM};

/// Root configuration for a pattern
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternConfig {
    /// Document metadata
    #[serde(default)]
    pub metadata: MetadataConfig,
    /// Tempo in BPM
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    /// Time signature numerator
    #[serde(default = "default_time_sig_num")]
    pub time_signature_num: u32,
    /// Time signature denominator
    #[serde(default = "default_time_sig_den")]
    pub time_signature_den: u32,
    /// Indent encoded output
    #[serde(default)]
    pub pretty: bool,
}

/// Metadata section of a pattern file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataConfig {
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_by: String,
}

fn default_tempo() -> f64 {
    DEFAULT_BPM
}
fn default_time_sig_num() -> u32 {
    4
}
fn default_time_sig_den() -> u32 {
    4
}
fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            description: String::new(),
            created_by: String::new(),
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            metadata: MetadataConfig::default(),
            tempo: default_tempo(),
            time_signature_num: default_time_sig_num(),
            time_signature_den: default_time_sig_den(),
            pretty: false,
        }
    }
}

impl PatternConfig {
    /// Load and validate a pattern configuration, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        debug!(path = ?path, tempo = config.tempo, "Loaded pattern config");
        Ok(config)
    }

    /// Parse a pattern configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a pattern configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Reject values that would make musical time meaningless
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tempo.is_finite() && self.tempo > 0.0,
            "tempo must be positive, got {}",
            self.tempo
        );
        ensure!(
            self.time_signature_num > 0,
            "time signature numerator must be positive"
        );
        ensure!(
            self.time_signature_den > 0,
            "time signature denominator must be positive"
        );
        Ok(())
    }

    pub fn musical_context(&self) -> MusicalContext {
        MusicalContext::new(self.tempo, self.time_signature_num, self.time_signature_den)
    }

    /// Document metadata stamped with the current time
    pub fn metadata(&self) -> Metadata {
        Metadata::new(&self.metadata.description, &self.metadata.created_by)
            .with_project(&self.metadata.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
metadata:
  project: "Drums"
  description: "Four on the floor"
  created_by: "test"
tempo: 128
time_signature_num: 4
time_signature_den: 4
pretty: true
"#;

        let config = PatternConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.metadata.project, "Drums");
        assert_eq!(config.metadata.description, "Four on the floor");
        assert_eq!(config.tempo, 128.0);
        assert!(config.pretty);
    }

    #[test]
    fn test_default_values() {
        let config = PatternConfig::from_yaml("tempo: 90").unwrap();
        assert_eq!(config.metadata, MetadataConfig::default());
        assert_eq!(config.metadata.project, "Basis");
        assert_eq!(config.time_signature_num, 4);
        assert_eq!(config.time_signature_den, 4);
        assert!(!config.pretty);

        let empty = PatternConfig::from_yaml("{}").unwrap();
        assert_eq!(empty, PatternConfig::default());
    }

    #[test]
    fn test_parse_toml_config() {
        let text = r#"
tempo = 100.0
time_signature_num = 6
time_signature_den = 8

[metadata]
description = "Triplets"
created_by = "toml"
"#;

        let config = PatternConfig::from_toml(text).unwrap();
        assert_eq!(config.metadata.description, "Triplets");
        assert_eq!(config.metadata.project, "Basis");
        assert_eq!(config.musical_context(), MusicalContext::new(100.0, 6, 8));
    }

    #[test]
    fn test_round_trip() {
        let original = PatternConfig {
            metadata: MetadataConfig {
                project: "Round".to_string(),
                description: "Round trip".to_string(),
                created_by: "test".to_string(),
            },
            tempo: 140.0,
            time_signature_num: 3,
            time_signature_den: 4,
            pretty: true,
        };

        let yaml = original.to_yaml().unwrap();
        assert_eq!(PatternConfig::from_yaml(&yaml).unwrap(), original);
    }

    #[test]
    fn test_metadata_from_config() {
        let config = PatternConfig::from_yaml(
            r#"
metadata:
  project: "Custom"
  description: "desc"
  created_by: "me"
"#,
        )
        .unwrap();

        let metadata = config.metadata();
        assert_eq!(metadata.project, "Custom");
        assert_eq!(metadata.description, "desc");
        assert_eq!(metadata.created_by, "me");
        assert!(!metadata.created.is_empty());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("pattern.yaml");
        fs::write(&yaml_path, "tempo: 75\n").unwrap();
        assert_eq!(PatternConfig::load(&yaml_path).unwrap().tempo, 75.0);

        let toml_path = dir.path().join("pattern.toml");
        fs::write(&toml_path, "tempo = 95.0\n").unwrap();
        assert_eq!(PatternConfig::load(&toml_path).unwrap().tempo, 95.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.yml");

        let mut config = PatternConfig::default();
        config.tempo = 150.0;
        config.save(&path).unwrap();

        assert_eq!(PatternConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempdir().unwrap();

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "this is not valid yaml: [").unwrap();
        assert!(PatternConfig::load(&broken).is_err());

        let zero_tempo = dir.path().join("zero.yaml");
        fs::write(&zero_tempo, "tempo: 0").unwrap();
        let err = PatternConfig::load(&zero_tempo).unwrap_err();
        assert!(format!("{err:#}").contains("tempo must be positive"));

        assert!(PatternConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
