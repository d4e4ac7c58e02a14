//! In-memory devices for replaying recordings without hardware.

use swipectl_common::error::{SwipeError, SwipeResult};
use swipectl_control_core::{BrightnessControl, OverlayNotifier, PlaybackControl, VolumeControl};

/// Brightness value that stands for auto-brightness.
pub const AUTO_BRIGHTNESS: f64 = -1.0;

/// Highest manual brightness.
pub const MAX_BRIGHTNESS: f64 = 100.0;

/// Volume stream that clamps to `0..=max`.
#[derive(Debug)]
pub struct SimulatedVolume {
    level: i32,
    max: i32,
}

impl SimulatedVolume {
    pub fn new(level: i32, max: i32) -> SwipeResult<Self> {
        if max <= 0 {
            return Err(SwipeError::device(format!(
                "max volume must be positive, got {max}"
            )));
        }
        Ok(Self {
            level: level.clamp(0, max),
            max,
        })
    }
}

impl VolumeControl for SimulatedVolume {
    fn volume(&self) -> i32 {
        self.level
    }

    fn set_volume(&mut self, level: i32) -> SwipeResult<()> {
        self.level = level.clamp(0, self.max);
        Ok(())
    }

    fn max_volume(&self) -> i32 {
        self.max
    }
}

/// Window brightness in `0..=100`, or [`AUTO_BRIGHTNESS`].
///
/// Restoring the default drops the window override, which hands control
/// back to the system's automatic brightness.
#[derive(Debug)]
pub struct SimulatedScreen {
    level: f64,
    auto_at_lowest: bool,
}

impl SimulatedScreen {
    pub fn new(level: f64, auto_at_lowest: bool) -> Self {
        Self {
            level: clamp_brightness(level),
            auto_at_lowest,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.level < 0.0
    }
}

fn clamp_brightness(level: f64) -> f64 {
    if level < 0.0 {
        AUTO_BRIGHTNESS
    } else {
        level.min(MAX_BRIGHTNESS)
    }
}

impl BrightnessControl for SimulatedScreen {
    fn brightness(&self) -> f64 {
        self.level
    }

    fn set_brightness(&mut self, level: f64) -> SwipeResult<()> {
        self.level = clamp_brightness(level);
        Ok(())
    }

    fn lowest_value_enables_auto_brightness(&self) -> bool {
        self.auto_at_lowest
    }

    fn restore_default_brightness(&mut self) -> SwipeResult<()> {
        tracing::debug!(level = self.level, "Dropping brightness override");
        self.level = AUTO_BRIGHTNESS;
        Ok(())
    }
}

/// Player with a position that never goes below zero.
#[derive(Debug)]
pub struct SimulatedPlayer {
    speed: f32,
    user_speed: Option<f32>,
    position_ms: i64,
}

impl SimulatedPlayer {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            user_speed: None,
            position_ms: 0,
        }
    }

    pub fn user_speed(&self) -> Option<f32> {
        self.user_speed
    }

    pub fn position_ms(&self) -> i64 {
        self.position_ms
    }
}

impl PlaybackControl for SimulatedPlayer {
    fn playback_speed(&self) -> f32 {
        self.speed
    }

    fn override_playback_speed(&mut self, speed: f32) -> SwipeResult<()> {
        self.speed = speed;
        Ok(())
    }

    fn record_user_selected_speed(&mut self, speed: f32) -> SwipeResult<()> {
        self.user_speed = Some(speed);
        Ok(())
    }

    fn seek_relative(&mut self, offset_ms: i64) -> SwipeResult<()> {
        self.position_ms = (self.position_ms + offset_ms).max(0);
        Ok(())
    }
}

/// The full set of simulated devices for one replay.
#[derive(Debug)]
pub struct SimulatedDevices {
    pub volume: SimulatedVolume,
    pub screen: SimulatedScreen,
    pub player: SimulatedPlayer,
}

impl SimulatedDevices {
    pub fn new(
        volume: i32,
        max_volume: i32,
        brightness: f64,
        speed: f32,
        auto_at_lowest: bool,
    ) -> SwipeResult<Self> {
        Ok(Self {
            volume: SimulatedVolume::new(volume, max_volume)?,
            screen: SimulatedScreen::new(brightness, auto_at_lowest),
            player: SimulatedPlayer::new(speed),
        })
    }
}

/// Overlay that prints every notification.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    pub notifications: usize,
}

impl OverlayNotifier for ConsoleOverlay {
    fn on_volume_changed(&mut self, level: i32, max: i32) {
        self.notifications += 1;
        println!("  [volume]     {level}/{max}");
    }

    fn on_brightness_changed(&mut self, level: f64) {
        self.notifications += 1;
        if level < 0.0 {
            println!("  [brightness] auto");
        } else {
            println!("  [brightness] {level:.0}%");
        }
    }

    fn on_speed_changed(&mut self, speed: f32) {
        self.notifications += 1;
        println!("  [speed]      {speed:.2}x");
    }

    fn on_seek_changed(&mut self, offset_ms: i32) {
        self.notifications += 1;
        println!("  [seek]       {offset_ms:+}ms");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_device_range() {
        let mut volume = SimulatedVolume::new(3, 15).unwrap();
        volume.set_volume(-2).unwrap();
        assert_eq!(volume.volume(), 0);
        volume.set_volume(40).unwrap();
        assert_eq!(volume.volume(), 15);
        assert!(SimulatedVolume::new(0, 0).is_err());
    }

    #[test]
    fn screen_maps_negative_to_auto_and_clamps_high() {
        let mut screen = SimulatedScreen::new(40.0, true);
        screen.set_brightness(-5.0).unwrap();
        assert!(screen.is_auto());
        screen.set_brightness(250.0).unwrap();
        assert_eq!(screen.brightness(), MAX_BRIGHTNESS);
    }

    #[test]
    fn screen_restore_default_returns_to_auto() {
        let mut screen = SimulatedScreen::new(50.0, false);
        screen.restore_default_brightness().unwrap();
        assert!(screen.is_auto());
        assert_eq!(screen.brightness(), AUTO_BRIGHTNESS);
    }

    #[test]
    fn player_position_stays_non_negative() {
        let mut player = SimulatedPlayer::new(1.0);
        player.seek_relative(-500).unwrap();
        assert_eq!(player.position_ms(), 0);
        player.seek_relative(1500).unwrap();
        player.seek_relative(-500).unwrap();
        assert_eq!(player.position_ms(), 1000);
    }
}
