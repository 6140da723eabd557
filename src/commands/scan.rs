//! Scan command - discovers extension modules.

use anyhow::Result;
use std::env;
use std::path::Path;

use crate::blacklist::Blacklist;
use crate::config::Config;
use crate::discover::find_extensions;
use crate::manifest::BuildManifest;
use crate::pattern::FilePattern;

/// Execute the scan command.
///
/// Discovers extension modules under the configured source root and prints
/// one line per module. With `output`, additionally writes a JSON manifest
/// for the external build step. `extra_args` are recorded on every
/// descriptor for the compiler invocation downstream.
pub fn cmd_scan(config: &Config, output: Option<&Path>, extra_args: &[String]) -> Result<()> {
    let pattern = FilePattern::new(&config.pattern);

    // Resolved once, up front, and only when filtering is enabled; a run
    // without filtering never reads the blacklist source.
    let blacklist = if config.use_blacklist {
        let bl = Blacklist::load(&config.blacklist_env, &config.blacklist_file)?;
        let source = if env::var(&config.blacklist_env).is_ok() {
            format!("${}", config.blacklist_env)
        } else {
            config.blacklist_file.display().to_string()
        };
        println!("Blacklist: {} entries from {}", bl.len(), source);
        Some(bl)
    } else {
        None
    };

    println!(
        "Scanning {} for {}...",
        config.source_root.display(),
        config.pattern
    );

    let modules: Vec<_> = find_extensions(
        &config.source_root,
        &pattern,
        &config.package_marker,
        blacklist.as_ref(),
        extra_args,
    )
    .collect();

    for module in &modules {
        println!("  {}  ({})", module.name, module.source_path.display());
    }
    println!("Found {} extension module(s)", modules.len());

    if let Some(path) = output {
        let manifest = BuildManifest::from_modules(
            &config.source_root,
            &config.pattern,
            extra_args,
            modules,
        );
        manifest.save(path)?;
        println!("Manifest written to {}", path.display());
    }

    Ok(())
}
