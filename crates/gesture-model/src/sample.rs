//! Recorded gesture samples.
//!
//! A recording is a JSONL file with one sample per line. Blank lines and
//! lines starting with `#` are ignored so fixtures can carry comments.

use serde::{Deserialize, Serialize};
use swipectl_common::error::{SwipeError, SwipeResult};

use crate::channel::Channel;

/// A single classified input sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureSample {
    /// Signed drag distance (pixels) already attributed to a channel.
    Scroll { channel: Channel, distance: f64 },

    /// Touch released; the gesture session ended.
    Release,
}

impl GestureSample {
    /// Shorthand for a scroll sample.
    pub fn scroll(channel: Channel, distance: f64) -> Self {
        Self::Scroll { channel, distance }
    }
}

/// Parse a JSONL recording. Errors name the offending line (1-based).
pub fn parse_samples(jsonl: &str) -> SwipeResult<Vec<GestureSample>> {
    jsonl
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str(line)
                .map_err(|e| SwipeError::sample(format!("line {line_no}: {e}")))
        })
        .collect()
}
