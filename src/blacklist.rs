//! Module blacklist loading.
//!
//! The blacklist is a set of qualified module names excluded from discovery
//! output. It comes from exactly one of two sources:
//! 1. An environment variable (whitespace-separated names). When the
//!    variable is set - even to an empty string - it entirely overrides the
//!    file.
//! 2. A sidecar text file, one name per line. Lines whose first character is
//!    `#` are comments; surrounding whitespace is trimmed; blank lines are
//!    skipped.
//!
//! A missing file with the variable unset is a fatal configuration error:
//! the caller asked for filtering and there is nothing to filter with.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::module_name::ModuleName;

/// Default environment variable consulted for blacklist names.
pub const DEFAULT_BLACKLIST_ENV: &str = "BLACKLIST_MODULES";

/// Default fallback blacklist file.
pub const DEFAULT_BLACKLIST_FILE: &str = "blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    /// The fallback file could not be read and the environment variable was
    /// unset. Carries the underlying I/O error verbatim.
    #[error("failed to read blacklist file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A set of qualified module names to exclude from the build.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    names: BTreeSet<String>,
}

impl Blacklist {
    /// Resolve the blacklist from the environment variable `env_var`, falling
    /// back to `file` when the variable is unset.
    pub fn load(env_var: &str, file: &Path) -> Result<Self, BlacklistError> {
        match env::var(env_var) {
            Ok(value) => Ok(Self::from_env_value(&value)),
            Err(_) => {
                let text = fs::read_to_string(file).map_err(|source| {
                    BlacklistError::FileAccess {
                        path: file.to_path_buf(),
                        source,
                    }
                })?;
                Ok(Self::parse(&text))
            }
        }
    }

    /// Build a blacklist from an environment variable value
    /// (whitespace-separated names).
    pub fn from_env_value(value: &str) -> Self {
        Self {
            names: value.split_whitespace().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse blacklist file contents.
    pub fn parse(text: &str) -> Self {
        let mut names = BTreeSet::new();
        for line in text.lines() {
            if line.starts_with('#') {
                continue;
            }
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            names.insert(name.to_string());
        }
        Self { names }
    }

    pub fn contains(&self, name: &ModuleName) -> bool {
        self.names.contains(&name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Iterate the names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let bl = Blacklist::parse("# comment\npkg.x\n\n  \npkg.y\n");
        let names: Vec<_> = bl.iter().collect();
        assert_eq!(names, vec!["pkg.x", "pkg.y"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let bl = Blacklist::parse("pkg.mod   \n");
        assert!(bl.contains(&ModuleName::from_dotted("pkg.mod")));
    }

    #[test]
    fn test_comment_requires_leading_hash() {
        // A hash after whitespace is not a comment marker; the trimmed line
        // is kept as-is (it can never match a real module name).
        let bl = Blacklist::parse("  # indented\n");
        assert_eq!(bl.len(), 1);
        assert_eq!(bl.iter().next(), Some("# indented"));
    }

    #[test]
    fn test_env_value_splits_on_whitespace() {
        let bl = Blacklist::from_env_value("pkg.a  pkg.b\tpkg.c");
        assert_eq!(bl.len(), 3);
        assert!(bl.contains(&ModuleName::from_dotted("pkg.b")));
    }

    #[test]
    fn test_empty_env_value_is_empty_blacklist() {
        let bl = Blacklist::from_env_value("");
        assert!(bl.is_empty());
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let err = Blacklist::load(
            "EXTSCAN_TEST_UNSET_VARIABLE",
            Path::new("/nonexistent/blacklist.txt"),
        )
        .unwrap_err();
        let BlacklistError::FileAccess { path, source } = err;
        assert_eq!(path, PathBuf::from("/nonexistent/blacklist.txt"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
