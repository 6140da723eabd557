//! Configuration management for extscan.
//!
//! Reads configuration from the process environment after an optional .env
//! file has been applied (see `main`). Environment variables take precedence
//! over .env. Every knob has a default, so a bare `extscan scan` works on a
//! conventional tree.

use std::env;
use std::path::PathBuf;

use crate::blacklist::{DEFAULT_BLACKLIST_ENV, DEFAULT_BLACKLIST_FILE};

/// Default root of the package tree.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Default filename pattern for extension sources.
pub const DEFAULT_PATTERN: &str = "*.pyx";

/// Default package-marker file.
pub const DEFAULT_PACKAGE_MARKER: &str = "__init__.py";

/// Default external compiler checked by preflight.
pub const DEFAULT_COMPILER: &str = "cythonize";

/// Extscan configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the package tree (default: src)
    pub source_root: PathBuf,
    /// Filename pattern for extension sources (default: *.pyx)
    pub pattern: String,
    /// File whose presence marks a directory as a package (default: __init__.py)
    pub package_marker: String,
    /// Whether blacklist filtering is enabled (USE_BLACKLIST set non-empty)
    pub use_blacklist: bool,
    /// Environment variable consulted for blacklist names
    pub blacklist_env: String,
    /// Fallback blacklist file read when the variable is unset
    pub blacklist_file: PathBuf,
    /// External compiler binary the build step will invoke
    pub compiler: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Self {
        let source_root = env::var("SOURCE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_ROOT));

        let pattern =
            env::var("EXTENSION_PATTERN").unwrap_or_else(|_| DEFAULT_PATTERN.to_string());

        let package_marker =
            env::var("PACKAGE_MARKER").unwrap_or_else(|_| DEFAULT_PACKAGE_MARKER.to_string());

        // Any non-empty value enables filtering, matching shell truthiness.
        let use_blacklist = env::var("USE_BLACKLIST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        let blacklist_file = env::var("BLACKLIST_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_FILE));

        let compiler = env::var("COMPILER_BIN").unwrap_or_else(|_| DEFAULT_COMPILER.to_string());

        Self {
            source_root,
            pattern,
            package_marker,
            use_blacklist,
            blacklist_env: DEFAULT_BLACKLIST_ENV.to_string(),
            blacklist_file,
            compiler,
        }
    }

    /// Check if the source root exists.
    pub fn has_source_root(&self) -> bool {
        self.source_root.is_dir()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  SOURCE_ROOT: {}", self.source_root.display());
        println!("  EXTENSION_PATTERN: {}", self.pattern);
        println!("  PACKAGE_MARKER: {}", self.package_marker);
        println!(
            "  USE_BLACKLIST: {}",
            if self.use_blacklist { "yes" } else { "no" }
        );
        println!("  BLACKLIST_FILE: {}", self.blacklist_file.display());
        println!("  COMPILER_BIN: {}", self.compiler);
        if self.has_source_root() {
            println!("  Source root: FOUND");
        } else {
            println!("  Source root: NOT FOUND (discovery will yield nothing)");
        }
    }
}
