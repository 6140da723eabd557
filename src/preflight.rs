//! Preflight checks for extension discovery.
//!
//! Validates the discovery inputs and host environment before a build. Run
//! with `extscan preflight` to check everything is ready. Discovery itself
//! tolerates most of these conditions (a missing root is just an empty
//! result), so preflight exists to turn "silently builds nothing" into a
//! diagnosable report.

use std::env;

use crate::blacklist::Blacklist;
use crate::config::Config;
use crate::discover::discover_packages;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed - the build will fail or build nothing.
    Fail,
    /// Check passed but with a warning.
    Warn,
    /// Check skipped (not applicable).
    Skip,
}

impl CheckResult {
    fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }

    fn skip(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Skip,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    /// Count of failed checks.
    pub fn fail_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count()
    }

    /// Count of warnings.
    pub fn warn_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warn)
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let icon = match check.status {
                CheckStatus::Pass => "✓",
                CheckStatus::Fail => "✗",
                CheckStatus::Warn => "⚠",
                CheckStatus::Skip => "○",
            };

            let status_str = match check.status {
                CheckStatus::Pass => "PASS",
                CheckStatus::Fail => "FAIL",
                CheckStatus::Warn => "WARN",
                CheckStatus::Skip => "SKIP",
            };

            print!("  {} [{}] {}", icon, status_str, check.name);
            if let Some(details) = &check.details {
                println!(": {}", details);
            } else {
                println!();
            }
        }

        println!();
        let total = self.checks.len();
        let passed = self
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count();
        let failed = self.fail_count();
        let warned = self.warn_count();

        println!("Summary: {}/{} passed", passed, total);
        if failed > 0 {
            println!("         {} FAILED - discovery will not produce a usable build", failed);
        }
        if warned > 0 {
            println!("         {} warnings", warned);
        }
    }
}

/// Run all preflight checks.
pub fn run_preflight(config: &Config) -> PreflightReport {
    let checks = vec![
        check_source_root(config),
        check_packages(config),
        check_blacklist_source(config),
        check_compiler(config),
    ];
    PreflightReport { checks }
}

/// The source root must exist and be a directory.
fn check_source_root(config: &Config) -> CheckResult {
    if config.source_root.is_dir() {
        CheckResult::pass_with("source root", &config.source_root.display().to_string())
    } else {
        CheckResult::fail(
            "source root",
            &format!(
                "{} is not a directory (set SOURCE_ROOT or pass --root)",
                config.source_root.display()
            ),
        )
    }
}

/// An empty tree is a valid discovery result but almost certainly a
/// misconfigured marker or root, so it warns rather than fails.
fn check_packages(config: &Config) -> CheckResult {
    let count = discover_packages(&config.source_root, &config.package_marker).count();
    if count > 0 {
        CheckResult::pass_with("packages", &format!("{} found", count))
    } else {
        CheckResult::warn(
            "packages",
            &format!(
                "no directories under {} contain {}",
                config.source_root.display(),
                config.package_marker
            ),
        )
    }
}

/// When filtering is enabled, the blacklist source must resolve.
fn check_blacklist_source(config: &Config) -> CheckResult {
    if !config.use_blacklist {
        return CheckResult::skip("blacklist", "filtering disabled");
    }
    if env::var(&config.blacklist_env).is_ok() {
        return CheckResult::pass_with("blacklist", &format!("from ${}", config.blacklist_env));
    }
    match Blacklist::load(&config.blacklist_env, &config.blacklist_file) {
        Ok(bl) => CheckResult::pass_with(
            "blacklist",
            &format!("{} ({} entries)", config.blacklist_file.display(), bl.len()),
        ),
        Err(e) => CheckResult::fail("blacklist", &e.to_string()),
    }
}

/// Discovery does not need the compiler, the downstream build does, so a
/// missing binary is a warning rather than a failure.
fn check_compiler(config: &Config) -> CheckResult {
    match which::which(&config.compiler) {
        Ok(path) => CheckResult::pass_with("compiler", &path.display().to_string()),
        Err(_) => CheckResult::warn(
            "compiler",
            &format!("{} not found on PATH (set COMPILER_BIN)", config.compiler),
        ),
    }
}
