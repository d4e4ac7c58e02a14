pub mod config;
pub mod replay;

use std::path::Path;

use swipectl_common::config::SwipeControlsConfig;

/// Explicit paths must load; the standard location falls back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SwipeControlsConfig> {
    match path {
        Some(path) => SwipeControlsConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display())),
        None => Ok(SwipeControlsConfig::load()),
    }
}
