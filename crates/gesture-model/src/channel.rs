//! Logical control channels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four independent swipe-control domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Volume,
    Brightness,
    Speed,
    Seek,
}

impl Channel {
    /// All channels in dispatch order.
    pub const ALL: [Channel; 4] = [
        Channel::Volume,
        Channel::Brightness,
        Channel::Speed,
        Channel::Seek,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Volume => "volume",
            Channel::Brightness => "brightness",
            Channel::Speed => "speed",
            Channel::Seek => "seek",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
