//! swipectl Common Utilities
//!
//! Shared infrastructure for all swipectl crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading
//! - dp to pixel conversion for swipe thresholds

pub mod config;
pub mod error;
pub mod logging;
pub mod units;

pub use config::*;
pub use error::*;
pub use units::*;
