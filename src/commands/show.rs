//! Show command - displays information.

use anyhow::Result;
use std::env;

use crate::blacklist::Blacklist;
use crate::config::Config;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the resolved blacklist
    Blacklist,
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Blacklist => {
            let bl = Blacklist::load(&config.blacklist_env, &config.blacklist_file)?;
            if env::var(&config.blacklist_env).is_ok() {
                println!("Blacklist (from ${}):", config.blacklist_env);
            } else {
                println!("Blacklist (from {}):", config.blacklist_file.display());
            }
            if bl.is_empty() {
                println!("  (empty)");
            }
            for name in bl.iter() {
                println!("  {}", name);
            }
            if !config.use_blacklist {
                println!();
                println!("Note: filtering is disabled (set USE_BLACKLIST or pass --blacklist)");
            }
        }
    }
    Ok(())
}
