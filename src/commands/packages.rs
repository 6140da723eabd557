//! Packages command - lists importable packages.

use anyhow::Result;

use crate::config::Config;
use crate::discover::discover_packages;

/// Execute the packages command.
pub fn cmd_packages(config: &Config) -> Result<()> {
    let mut count = 0;
    for package in discover_packages(&config.source_root, &config.package_marker) {
        println!("{}", package);
        count += 1;
    }
    if count == 0 {
        eprintln!(
            "  [WARN] No packages under {} (marker: {})",
            config.source_root.display(),
            config.package_marker
        );
    }
    Ok(())
}
