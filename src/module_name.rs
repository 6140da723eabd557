//! Qualified module names.
//!
//! A `ModuleName` is the dotted identifier of a package or module within a
//! source tree, e.g. `foo.bar.baz`. Names are built by the discoverer from
//! filesystem paths and convert back to relative paths when a package
//! directory needs to be located.

use std::fmt::{Display, Error, Formatter};
use std::path::{Component, Path, PathBuf};

/// A qualified, dot-separated module name. Always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(Vec<String>);

impl ModuleName {
    pub fn new(segments: Vec<String>) -> Self {
        assert!(!segments.is_empty());
        Self(segments)
    }

    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Parse a dotted name such as `pkg.sub.mod`.
    pub fn from_dotted(s: &str) -> Self {
        let segments = s.split('.').map(|s| s.to_string()).collect();
        Self::new(segments)
    }

    /// Build a name from a path relative to the source root, one segment per
    /// directory component.
    ///
    /// Returns `None` for an empty path or when any component is not valid
    /// Unicode (such a directory cannot form a dotted name).
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?.to_string()),
                _ => return None,
            }
        }
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Extend this name with one more segment (`pkg` + `mod` -> `pkg.mod`).
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    /// Relative filesystem path of the package directory this name refers to.
    pub fn as_rel_path(&self) -> PathBuf {
        self.0.iter().collect()
    }

    pub fn as_str(&self) -> String {
        self.0.join(".")
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Display for ModuleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ModuleName> for String {
    fn from(value: &ModuleName) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dotted_splits_segments() {
        let m = ModuleName::from_dotted("pkg.sub.mod");
        assert_eq!(m, ModuleName::from_segments(&["pkg", "sub", "mod"]));
    }

    #[test]
    fn from_relative_path_builds_segments() {
        let m = ModuleName::from_relative_path(Path::new("foo/bar")).unwrap();
        assert_eq!(m.as_str(), "foo.bar");
    }

    #[test]
    fn from_relative_path_empty_is_none() {
        assert_eq!(ModuleName::from_relative_path(Path::new("")), None);
    }

    #[test]
    fn child_appends_segment() {
        let pkg = ModuleName::from_dotted("foo.bar");
        assert_eq!(pkg.child("baz").as_str(), "foo.bar.baz");
    }

    #[test]
    fn as_rel_path_round_trips() {
        let m = ModuleName::from_dotted("a.b.c");
        assert_eq!(m.as_rel_path(), PathBuf::from("a/b/c"));
        assert_eq!(
            ModuleName::from_relative_path(&m.as_rel_path()).unwrap(),
            m
        );
    }

    #[test]
    fn display_is_dotted() {
        let m = ModuleName::from_segments(&["x", "y"]);
        assert_eq!(m.to_string(), "x.y");
    }
}
