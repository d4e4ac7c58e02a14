//! Device capabilities consumed by the dispatcher.
//!
//! The dispatcher never owns a device. It borrows each capability for the
//! lifetime of an overlay session; a missing capability disables its
//! channel(s) without affecting the rest.

use swipectl_common::error::SwipeResult;

/// System media volume.
pub trait VolumeControl {
    /// Current volume level.
    fn volume(&self) -> i32;

    /// Request a new level. Clamping to the device range is up to the
    /// implementation.
    fn set_volume(&mut self, level: i32) -> SwipeResult<()>;

    /// Highest level the device accepts.
    fn max_volume(&self) -> i32;
}

/// Screen brightness for the current window.
pub trait BrightnessControl {
    /// Current brightness. Negative values may mean auto-brightness.
    fn brightness(&self) -> f64;

    fn set_brightness(&mut self, level: f64) -> SwipeResult<()>;

    /// Whether the lowest value hands control back to auto-brightness.
    fn lowest_value_enables_auto_brightness(&self) -> bool;

    /// Return to the device's default brightness (leaves manual mode).
    fn restore_default_brightness(&mut self) -> SwipeResult<()>;
}

/// Playback speed and position of the active player.
pub trait PlaybackControl {
    /// Current playback speed multiplier.
    fn playback_speed(&self) -> f32;

    /// Apply `speed` to the current video only.
    fn override_playback_speed(&mut self, speed: f32) -> SwipeResult<()>;

    /// Remember `speed` as the user's explicit choice for later videos.
    fn record_user_selected_speed(&mut self, speed: f32) -> SwipeResult<()>;

    /// Seek relative to the current position.
    fn seek_relative(&mut self, offset_ms: i64) -> SwipeResult<()>;
}

/// One-way notifications for the on-screen overlay. Must not block.
pub trait OverlayNotifier {
    fn on_volume_changed(&mut self, level: i32, max: i32);
    fn on_brightness_changed(&mut self, level: f64);
    fn on_speed_changed(&mut self, speed: f32);
    fn on_seek_changed(&mut self, offset_ms: i32);
}

/// Borrowed capability handles for one overlay session.
pub struct Controls<'a> {
    pub volume: Option<&'a mut dyn VolumeControl>,
    pub brightness: Option<&'a mut dyn BrightnessControl>,
    pub playback: Option<&'a mut dyn PlaybackControl>,
    pub overlay: &'a mut dyn OverlayNotifier,
}

impl<'a> Controls<'a> {
    /// Handles with only the overlay attached; every device channel is off.
    pub fn new(overlay: &'a mut dyn OverlayNotifier) -> Self {
        Self {
            volume: None,
            brightness: None,
            playback: None,
            overlay,
        }
    }

    pub fn with_volume(mut self, volume: &'a mut dyn VolumeControl) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_brightness(mut self, brightness: &'a mut dyn BrightnessControl) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_playback(mut self, playback: &'a mut dyn PlaybackControl) -> Self {
        self.playback = Some(playback);
        self
    }
}
