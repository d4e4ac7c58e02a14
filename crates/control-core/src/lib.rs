//! swipectl Control Core
//!
//! Turns continuous, noisy drag distances into discrete control steps:
//! - **Step accumulation:** quantize signed distance into unit ticks while
//!   carrying the fractional remainder between samples
//! - **Channel policies:** volume, brightness (auto-brightness hysteresis),
//!   playback speed (fixed-point clamp), and relative seek
//! - **Dispatch:** one accumulator per channel, wired to borrowed devices
//!
//! This crate is pure computation on the caller's thread. Devices and the
//! on-screen overlay are reached only through the traits in [`controls`].

pub mod accumulator;
pub mod controls;
pub mod dispatcher;
pub mod policy;

pub use accumulator::{StepAccumulator, Tick};
pub use controls::{BrightnessControl, Controls, OverlayNotifier, PlaybackControl, VolumeControl};
pub use dispatcher::{DispatcherSettings, ScrollDispatcher};
