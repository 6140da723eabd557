//! Package enumeration.
//!
//! A directory is an importable package when it contains the package-marker
//! file (`__init__.py` by convention) and every directory between it and the
//! source root is itself a package. Subtrees without the marker are pruned
//! from the walk entirely, so a marker-less intermediate directory hides
//! everything below it.

use std::path::Path;
use walkdir::WalkDir;

use crate::module_name::ModuleName;

/// Enumerate every package under `root`, nested subpackages included.
///
/// Yields dotted names in sorted filesystem order. The sequence is lazy and
/// restartable: each call re-walks the tree. A missing or unreadable `root`
/// yields an empty sequence; unreadable subdirectories are skipped by the
/// walk rather than surfaced.
pub fn discover_packages<'a>(
    root: &'a Path,
    marker: &'a str,
) -> impl Iterator<Item = ModuleName> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            // Keep the root itself so the walk can descend; below it, only
            // package directories are entered.
            entry.depth() == 0 || (entry.file_type().is_dir() && has_marker(entry.path(), marker))
        })
        .filter_map(move |entry| {
            let entry = entry.ok()?;
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return None;
            }
            let rel = entry.path().strip_prefix(root).ok()?;
            ModuleName::from_relative_path(rel)
        })
}

/// Check whether `dir` carries the package-marker file.
fn has_marker(dir: &Path, marker: &str) -> bool {
    dir.join(marker).is_file()
}
