/*!
# Target List

The ordered list of files to normalize, and its loading from TOML or
YAML targets files.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files rewritten when no targets are supplied
pub const DEFAULT_TARGETS: &[&str] = &[
    "frontend/src/pages/admin/AdminDashboard.jsx",
    "frontend/src/pages/farmer/CreateListing.jsx",
];

/// How the BOM-free content is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Truncate and overwrite the file
    #[default]
    InPlace,
    /// Write a sibling temp file and rename it over the target
    Atomic,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::InPlace => write!(f, "in-place"),
            WriteMode::Atomic => write!(f, "atomic"),
        }
    }
}

/// On-disk shape of a targets file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsFile {
    /// Files to normalize, in processing order
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Optional write mode override
    #[serde(default)]
    pub write_mode: Option<WriteMode>,
}

impl TargetsFile {
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            anyhow::bail!("Targets file lists no paths");
        }
        if let Some(empty) = self.paths.iter().position(|p| p.as_os_str().is_empty()) {
            anyhow::bail!("Targets file entry #{} is an empty path", empty + 1);
        }
        Ok(())
    }
}

/// Ordered, immutable list of files to process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetList {
    paths: Vec<PathBuf>,
}

impl TargetList {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in list
    pub fn default_targets() -> Self {
        Self::new(DEFAULT_TARGETS.iter().copied())
    }

    /// Load from a TOML (`.toml`) or YAML (`.yaml`/`.yml`) file.
    ///
    /// Returns the list together with the write mode the file requests, if any.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<(Self, Option<WriteMode>)> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read targets file {}", path.display()))?;

        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&content)
                .with_context(|| format!("Failed to parse YAML targets from {}", path.display()))?,
            _ => Self::parse_toml(&content)
                .with_context(|| format!("Failed to parse TOML targets from {}", path.display()))?,
        };

        file.validate()
            .with_context(|| format!("Invalid targets file {}", path.display()))?;

        tracing::info!(
            "Loaded {} targets from {}",
            file.paths.len(),
            path.display()
        );

        Ok((Self { paths: file.paths }, file.write_mode))
    }

    pub fn parse_toml(content: &str) -> Result<TargetsFile> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_yaml(content: &str) -> Result<TargetsFile> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn extend<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
