//! Build manifest - the discovery run's output record.
//!
//! The manifest is the contract between discovery and the external compiler
//! toolchain: one entry per buildable module, plus the inputs that produced
//! the set. Written as JSON so the build driver can consume it without
//! linking against extscan.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::discover::ExtensionModule;

/// A manifest of buildable extension modules from one discovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Root of the scanned package tree
    pub source_root: PathBuf,
    /// Filename pattern the sources were matched with
    pub pattern: String,
    /// Pass-through arguments for the external compiler
    pub extra_args: Vec<String>,
    /// Discovered modules, in discovery order
    pub modules: Vec<ManifestEntry>,
}

/// One buildable module: the compiled module is named exactly `name` and
/// built from `source_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub source_path: PathBuf,
}

impl BuildManifest {
    /// Build a manifest from discovered modules.
    pub fn from_modules(
        source_root: &Path,
        pattern: &str,
        extra_args: &[String],
        modules: impl IntoIterator<Item = ExtensionModule>,
    ) -> Self {
        Self {
            source_root: source_root.to_path_buf(),
            pattern: pattern.to_string(),
            extra_args: extra_args.to_vec(),
            modules: modules
                .into_iter()
                .map(|m| ManifestEntry {
                    name: m.name.as_str(),
                    source_path: m.source_path,
                })
                .collect(),
        }
    }

    /// Save manifest to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write manifest to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest from {}", path.as_ref().display()))?;
        let manifest: Self = serde_json::from_str(&json)?;
        Ok(manifest)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module_name::ModuleName;

    fn sample() -> BuildManifest {
        BuildManifest::from_modules(
            Path::new("src"),
            "*.pyx",
            &["--embedsignature".to_string()],
            vec![ExtensionModule {
                name: ModuleName::from_dotted("foo.a"),
                source_path: PathBuf::from("src/foo/a.pyx"),
                extra_args: vec!["--embedsignature".to_string()],
            }],
        )
    }

    #[test]
    fn test_manifest_serialization() {
        let manifest = sample();
        let json = serde_json::to_string(&manifest).unwrap();
        let loaded: BuildManifest = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.pattern, "*.pyx");
        assert_eq!(loaded.modules.len(), 1);
        assert_eq!(loaded.modules[0].name, "foo.a");
        assert_eq!(loaded.modules[0].source_path, PathBuf::from("src/foo/a.pyx"));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = BuildManifest::from_modules(Path::new("src"), "*.pyx", &[], vec![]);
        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
    }
}
