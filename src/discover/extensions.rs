//! Extension source matching.
//!
//! For every discovered package, match the configured filename pattern
//! against the package directory's direct children (never recursively - a
//! nested source belongs to the nested package) and turn each match into a
//! buildable-module descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use crate::blacklist::Blacklist;
use crate::discover::packages::discover_packages;
use crate::module_name::ModuleName;
use crate::pattern::FilePattern;

/// A buildable native-extension module: the compiled module will be named
/// exactly `name` and built from `source_path`.
#[derive(Debug, Clone)]
pub struct ExtensionModule {
    pub name: ModuleName,
    pub source_path: PathBuf,
    /// Pass-through arguments for the external compiler.
    pub extra_args: Vec<String>,
}

/// Discover extension modules under `root`.
///
/// Walks packages via [`discover_packages`], matches `pattern` against each
/// package directory's direct children, and yields one descriptor per match
/// in sorted order. When `blacklist` is supplied, matches whose qualified
/// name it contains are silently skipped; passing `None` disables filtering
/// entirely, so callers that never request filtering never need a blacklist
/// source to exist.
///
/// Qualified names are unique for a well-formed tree: one source file per
/// package and stem. Duplicate stems (e.g. `a.pyx` and `a.pxd` both matching
/// a permissive pattern) indicate a misconfigured tree and are passed
/// through as-is.
pub fn find_extensions<'a>(
    root: &'a Path,
    pattern: &'a FilePattern,
    marker: &'a str,
    blacklist: Option<&'a Blacklist>,
    extra_args: &'a [String],
) -> impl Iterator<Item = ExtensionModule> + 'a {
    discover_packages(root, marker).flat_map(move |pkg| {
        let pkgdir = root.join(pkg.as_rel_path());
        let mut found = Vec::new();
        for (file_name, path) in matching_files(&pkgdir, pattern) {
            let stem = Path::new(&file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(&file_name);
            let name = pkg.child(stem);
            if let Some(bl) = blacklist {
                if bl.contains(&name) {
                    continue;
                }
            }
            found.push(ExtensionModule {
                name,
                source_path: path,
                extra_args: extra_args.to_vec(),
            });
        }
        found.into_iter()
    })
}

/// Pattern-matching direct children of `dir`, sorted by file name.
///
/// A missing or unreadable directory yields nothing (the package may have
/// been removed between the walk and this read).
fn matching_files(dir: &Path, pattern: &FilePattern) -> Vec<(String, PathBuf)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if pattern.matches(file_name) {
            found.push((file_name.to_string(), path));
        }
    }
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MARKER: &str = "__init__.py";

    fn mkpkg(root: &Path, rel: &str, files: &[&str]) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MARKER), "").unwrap();
        for f in files {
            fs::write(dir.join(f), "").unwrap();
        }
    }

    #[test]
    fn test_direct_children_only() {
        let tmp = TempDir::new().unwrap();
        mkpkg(tmp.path(), "pkg", &["top.pyx"]);
        mkpkg(tmp.path(), "pkg/sub", &["inner.pyx"]);
        // A stray subdirectory without a marker must not contribute matches.
        fs::create_dir_all(tmp.path().join("pkg/stray")).unwrap();
        fs::write(tmp.path().join("pkg/stray/lost.pyx"), "").unwrap();

        let pattern = FilePattern::new("*.pyx");
        let names: Vec<_> = find_extensions(tmp.path(), &pattern, MARKER, None, &[])
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["pkg.top", "pkg.sub.inner"]);
    }

    #[test]
    fn test_stem_strips_last_extension_only() {
        let tmp = TempDir::new().unwrap();
        mkpkg(tmp.path(), "pkg", &["wrapped.v2.pyx"]);

        let pattern = FilePattern::new("*.pyx");
        let names: Vec<_> = find_extensions(tmp.path(), &pattern, MARKER, None, &[])
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["pkg.wrapped.v2"]);
    }

    #[test]
    fn test_extra_args_attached_to_each_descriptor() {
        let tmp = TempDir::new().unwrap();
        mkpkg(tmp.path(), "pkg", &["a.pyx", "b.pyx"]);

        let pattern = FilePattern::new("*.pyx");
        let args = vec!["--embedsignature".to_string()];
        for module in find_extensions(tmp.path(), &pattern, MARKER, None, &args) {
            assert_eq!(module.extra_args, args);
        }
    }

    #[test]
    fn test_blacklist_skips_named_module() {
        let tmp = TempDir::new().unwrap();
        mkpkg(tmp.path(), "pkg", &["a.pyx", "b.pyx"]);

        let pattern = FilePattern::new("*.pyx");
        let bl = Blacklist::from_env_value("pkg.a");
        let names: Vec<_> = find_extensions(tmp.path(), &pattern, MARKER, Some(&bl), &[])
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["pkg.b"]);
    }
}
