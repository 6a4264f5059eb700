//! Proc Inventory: a discovery data source for a monitoring agent.
//!
//! Tracked processes announce themselves by dropping a marker file into a
//! directory: the file name is the process name and the first line is its pid.
//! This library scans that directory on demand and encodes the result as a
//! low-level discovery document the agent uses to create per-process items.
use std::sync::Arc;

use config::Config;
use inventory::InventoryService;
use metrics::Registry;

pub mod config;
pub mod discovery;
pub mod error;
pub mod fsutil;
pub mod inventory;
pub mod marker;
pub mod metrics;
pub mod process;

/// Command-line flag that lists the supported item keys instead of invoking one.
pub const LIST_FLAG: &str = "--list";

/// Runs a single agent request.
///
/// Resolves the configuration from the environment, builds the item registry
/// and either invokes one item key or lists all of them.
///
/// # Arguments
///
/// * `args` - `[KEY [PARAM...]]`, or [`LIST_FLAG`]. Without a key,
///   [`metrics::DISCOVERY_KEY`] is invoked.
///
/// # Returns
///
/// The text value to hand back to the agent.
///
/// # Errors
///
/// Possible errors include:
/// - An invalid `ITEM_TIMEOUT` value.
/// - An unknown item key, or parameters for a key that takes none.
/// - A failed discovery: no marker directory configured, the directory cannot
///   be read, or the scan exceeds the timeout.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<String, Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let registry = Registry::with_defaults(Arc::new(InventoryService::new(config)));

    let mut args = args.into_iter();
    let key = args.next();
    if key.as_deref() == Some(LIST_FLAG) {
        let listing: Vec<String> = registry.metrics().map(|m| m.to_string()).collect();
        return Ok(listing.join("\n"));
    }

    let key = key.unwrap_or_else(|| metrics::DISCOVERY_KEY.to_owned());
    let params: Vec<String> = args.collect();
    log::trace!("Handling item `{key}` with parameters {params:?}");

    match registry.invoke(&key, &params) {
        Ok(value) => Ok(value),
        Err(err) => {
            log::error!("Item `{key}` failed: {err}");
            Err(err.into())
        }
    }
}
