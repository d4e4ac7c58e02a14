//! Fake devices and a recording overlay shared by the integration tests.

#![allow(dead_code)]

use swipectl_common::error::{SwipeError, SwipeResult};
use swipectl_control_core::{BrightnessControl, OverlayNotifier, PlaybackControl, VolumeControl};

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Volume(i32, i32),
    Brightness(f64),
    Speed(f32),
    Seek(i32),
}

#[derive(Default)]
pub struct RecordingOverlay {
    pub notices: Vec<Notice>,
}

impl OverlayNotifier for RecordingOverlay {
    fn on_volume_changed(&mut self, level: i32, max: i32) {
        self.notices.push(Notice::Volume(level, max));
    }
    fn on_brightness_changed(&mut self, level: f64) {
        self.notices.push(Notice::Brightness(level));
    }
    fn on_speed_changed(&mut self, speed: f32) {
        self.notices.push(Notice::Speed(speed));
    }
    fn on_seek_changed(&mut self, offset_ms: i32) {
        self.notices.push(Notice::Seek(offset_ms));
    }
}

pub struct FakeVolume {
    pub level: i32,
    pub max: i32,
    pub reject: bool,
}

impl VolumeControl for FakeVolume {
    fn volume(&self) -> i32 {
        self.level
    }
    fn set_volume(&mut self, level: i32) -> SwipeResult<()> {
        if self.reject {
            return Err(SwipeError::device("volume locked"));
        }
        self.level = level.clamp(0, self.max);
        Ok(())
    }
    fn max_volume(&self) -> i32 {
        self.max
    }
}

pub struct FakeScreen {
    pub level: f64,
    pub auto_at_lowest: bool,
    pub restores: usize,
}

impl BrightnessControl for FakeScreen {
    fn brightness(&self) -> f64 {
        self.level
    }
    fn set_brightness(&mut self, level: f64) -> SwipeResult<()> {
        self.level = level;
        Ok(())
    }
    fn lowest_value_enables_auto_brightness(&self) -> bool {
        self.auto_at_lowest
    }
    fn restore_default_brightness(&mut self) -> SwipeResult<()> {
        self.restores += 1;
        self.level = -1.0;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePlayer {
    pub speed: f32,
    pub user_speed: Option<f32>,
    pub seeks: Vec<i64>,
}

impl PlaybackControl for FakePlayer {
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
        self.seeks.push(offset_ms);
        Ok(())
    }
}
