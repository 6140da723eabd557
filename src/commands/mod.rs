//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `scan` - Discover extension modules, optionally writing a manifest
//! - `packages` - List importable packages
//! - `show` - Display configuration and the resolved blacklist
//! - `preflight` - Validate inputs and toolchain before a build

mod packages;
mod preflight;
mod scan;
mod show;

pub use packages::cmd_packages;
pub use preflight::cmd_preflight;
pub use scan::cmd_scan;
pub use show::{cmd_show, ShowTarget};
