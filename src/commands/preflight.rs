//! Preflight command - validates inputs before a build.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::preflight::run_preflight;

/// Execute the preflight command.
pub fn cmd_preflight(config: &Config, strict: bool) -> Result<()> {
    let report = run_preflight(config);
    report.print();

    if strict && !report.all_passed() {
        bail!("{} preflight check(s) failed", report.fail_count());
    }
    Ok(())
}
