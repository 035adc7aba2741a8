//! Fixed vocabularies shared by every generator in a run.

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The finite domains that fixture values are drawn from.
///
/// `eclipse_versions` and `java_versions` are ordered oldest first; install
/// generation relies on that order to compute "at least the minimum" ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub license_types: Vec<String>,
    pub platforms: Vec<String>,
    pub eclipse_versions: Vec<String>,
    pub java_versions: Vec<String>,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_locales() -> Vec<String> {
    strings(&["en_US", "en_CA", "fr_CA", "de_DE", "ja_JP"])
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            license_types: strings(&["EPL-2.0", "EPL-1.0", "GPL"]),
            platforms: strings(&["windows", "macos", "linux"]),
            eclipse_versions: strings(&["4.6", "4.7", "4.8", "4.9", "4.10", "4.11", "4.12"]),
            java_versions: strings(&["1.5", "1.6", "1.7", "1.8", "1.9", "1.10"]),
            locales: default_locales(),
        }
    }
}

impl Vocabulary {
    /// Parse a vocabulary from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, GeneratorError> {
        let vocabulary: Vocabulary = serde_yaml::from_str(yaml)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Every domain must have at least one entry.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let domains = [
            ("license_types", &self.license_types),
            ("platforms", &self.platforms),
            ("eclipse_versions", &self.eclipse_versions),
            ("java_versions", &self.java_versions),
            ("locales", &self.locales),
        ];

        for (name, values) in domains {
            if values.is_empty() {
                return Err(GeneratorError::InvalidArgument(format!(
                    "vocabulary domain '{name}' is empty"
                )));
            }
        }
        Ok(())
    }

    /// Java versions at or above `minimum`, in vocabulary order.
    pub fn java_versions_from(&self, minimum: &str) -> Result<&[String], GeneratorError> {
        let position = self
            .java_versions
            .iter()
            .position(|v| v == minimum)
            .ok_or_else(|| GeneratorError::UnknownReference {
                kind: "java version",
                value: minimum.to_string(),
            })?;
        Ok(&self.java_versions[position..])
    }

    /// Position of an Eclipse version in the vocabulary ordering.
    pub fn eclipse_rank(&self, version: &str) -> Result<usize, GeneratorError> {
        self.eclipse_versions
            .iter()
            .position(|v| v == version)
            .ok_or_else(|| GeneratorError::UnknownReference {
                kind: "eclipse version",
                value: version.to_string(),
            })
    }
}
