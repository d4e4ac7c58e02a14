//! Per-channel tick effects.
//!
//! Each tick from a channel's accumulator becomes exactly one device change
//! plus one overlay update. A channel whose capability is absent does
//! nothing, and the overlay is left alone.

use swipectl_common::error::SwipeResult;
use swipectl_gesture_model::Channel;

use crate::controls::Controls;

/// Speed is stored as hundredths to avoid drift like `1.05 -> 1.0499999`.
pub const SPEED_SCALE: f32 = 100.0;

/// Speed change per tick, in hundredths (0.05x).
pub const SPEED_STEP: i32 = 5;

/// Slowest speed, in hundredths (0.05x).
pub const SPEED_MIN: i32 = 5;

/// Fastest speed, in hundredths (8.00x).
pub const SPEED_MAX: i32 = 800;

/// Seek distance per tick. Negative: swipe direction and seek direction
/// are opposite.
pub const SEEK_STEP_MS: f64 = -500.0;

/// Apply one tick of `direction` to `channel`.
pub fn apply(
    channel: Channel,
    direction: i32,
    volume_sensitivity: i32,
    controls: &mut Controls<'_>,
) -> SwipeResult<()> {
    match channel {
        Channel::Volume => apply_volume(direction, volume_sensitivity, controls),
        Channel::Brightness => apply_brightness(direction, controls),
        Channel::Speed => apply_speed(direction, controls),
        Channel::Seek => apply_seek(direction, controls),
    }
}

fn apply_volume(
    direction: i32,
    sensitivity: i32,
    controls: &mut Controls<'_>,
) -> SwipeResult<()> {
    let Some(volume) = controls.volume.as_deref_mut() else {
        return Ok(());
    };

    let target = volume
        .volume()
        .saturating_add(direction.saturating_mul(sensitivity));
    volume.set_volume(target)?;
    controls
        .overlay
        .on_volume_changed(volume.volume(), volume.max_volume());
    Ok(())
}

fn apply_brightness(direction: i32, controls: &mut Controls<'_>) -> SwipeResult<()> {
    let Some(screen) = controls.brightness.as_deref_mut() else {
        return Ok(());
    };

    let current = screen.brightness();
    if should_adjust_brightness(
        current,
        direction,
        screen.lowest_value_enables_auto_brightness(),
    ) {
        screen.set_brightness(current + f64::from(direction))?;
    } else {
        tracing::debug!(brightness = current, "Leaving auto-brightness range, restoring default");
        screen.restore_default_brightness()?;
    }
    controls.overlay.on_brightness_changed(screen.brightness());
    Ok(())
}

fn apply_speed(direction: i32, controls: &mut Controls<'_>) -> SwipeResult<()> {
    let Some(playback) = controls.playback.as_deref_mut() else {
        return Ok(());
    };

    let speed = next_speed(playback.playback_speed(), direction);
    playback.override_playback_speed(speed)?;
    playback.record_user_selected_speed(speed)?;
    controls.overlay.on_speed_changed(speed);
    Ok(())
}

fn apply_seek(direction: i32, controls: &mut Controls<'_>) -> SwipeResult<()> {
    let Some(playback) = controls.playback.as_deref_mut() else {
        return Ok(());
    };

    let offset_ms = seek_offset_ms(direction);
    playback.seek_relative(offset_ms)?;
    controls.overlay.on_seek_changed(offset_ms as i32);
    Ok(())
}

/// Hysteresis guard at the auto-brightness boundary.
///
/// A downward tick at the boundary must not push brightness below it; an
/// upward tick may always leave it.
pub fn should_adjust_brightness(
    brightness: f64,
    direction: i32,
    lowest_value_enables_auto_brightness: bool,
) -> bool {
    if lowest_value_enables_auto_brightness {
        brightness > 0.0 || direction > 0
    } else {
        brightness >= 0.0 || direction >= 0
    }
}

/// Speed in hundredths, rounded to the nearest step.
pub fn speed_to_fixed(speed: f32) -> i32 {
    (speed * SPEED_SCALE).round() as i32
}

pub fn fixed_to_speed(fixed: i32) -> f32 {
    fixed as f32 / SPEED_SCALE
}

/// Speed after one tick. A positive swipe direction slows down.
pub fn next_speed(current: f32, direction: i32) -> f32 {
    let fixed = (speed_to_fixed(current) - direction * SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
    fixed_to_speed(fixed)
}

pub fn seek_offset_ms(direction: i32) -> i64 {
    (f64::from(direction) * SEEK_STEP_MS).round() as i64
}
