//! swipectl Gesture Model
//!
//! Data types shared between the control engine and its callers:
//! - [`Channel`]: the logical control channel a drag was classified into
//! - [`GestureSample`]: one recorded input sample, stored as JSONL

pub mod channel;
pub mod sample;

pub use channel::Channel;
pub use sample::{parse_samples, GestureSample};
