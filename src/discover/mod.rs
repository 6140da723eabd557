//! Source tree discovery.
//!
//! Two stages, both lazy:
//! - `packages` - walk the source root and yield every importable package
//!   (directories carrying the package marker).
//! - `extensions` - for each package, match extension source files and
//!   produce buildable-module descriptors.

pub mod extensions;
pub mod packages;

pub use extensions::{find_extensions, ExtensionModule};
pub use packages::discover_packages;
