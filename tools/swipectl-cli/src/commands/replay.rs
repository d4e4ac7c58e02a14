//! Replay a gesture recording against simulated devices.

use std::path::PathBuf;

use swipectl_common::config::SwipeControlsConfig;
use swipectl_control_core::{
    BrightnessControl, Controls, DispatcherSettings, PlaybackControl, ScrollDispatcher,
    VolumeControl,
};
use swipectl_gesture_model::{parse_samples, Channel, GestureSample};

use crate::devices::{ConsoleOverlay, SimulatedDevices};

/// Starting state of the simulated devices.
pub struct DeviceState {
    pub volume: i32,
    pub max_volume: i32,
    pub brightness: f64,
    pub speed: f32,
}

/// Devices detached on the command line, on top of the config toggles.
#[derive(Default)]
pub struct Detached {
    pub volume: bool,
    pub brightness: bool,
    pub playback: bool,
}

/// Counters collected while replaying.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub gestures: usize,
    pub ticks: usize,
}

pub fn run(
    path: PathBuf,
    config: SwipeControlsConfig,
    initial: DeviceState,
    detached: Detached,
) -> anyhow::Result<()> {
    config.validate()?;

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let samples = parse_samples(&content)?;
    println!("Replaying {} sample(s) from {}", samples.len(), path.display());

    let mut devices = SimulatedDevices::new(
        initial.volume,
        initial.max_volume,
        initial.brightness,
        initial.speed,
        config.lowest_value_enables_auto_brightness,
    )?;
    let mut overlay = ConsoleOverlay::default();

    let report = replay(&samples, &config, &detached, &mut devices, &mut overlay)?;

    println!();
    println!("Summary:");
    println!("  Gestures: {}", report.gestures);
    println!("  Ticks: {}", report.ticks);
    println!("  Overlay updates: {}", overlay.notifications);
    println!(
        "  Volume: {}/{}",
        devices.volume.volume(),
        devices.volume.max_volume()
    );
    if devices.screen.is_auto() {
        println!("  Brightness: auto");
    } else {
        println!("  Brightness: {:.0}%", devices.screen.brightness());
    }
    println!(
        "  Speed: {:.2}x (user choice: {})",
        devices.player.playback_speed(),
        devices
            .player
            .user_speed()
            .map(|s| format!("{s:.2}x"))
            .unwrap_or_else(|| "unchanged".to_string())
    );
    println!("  Position: {}ms", devices.player.position_ms());

    Ok(())
}

/// Feed `samples` through a dispatcher wired to `devices`.
pub fn replay(
    samples: &[GestureSample],
    config: &SwipeControlsConfig,
    detached: &Detached,
    devices: &mut SimulatedDevices,
    overlay: &mut ConsoleOverlay,
) -> anyhow::Result<ReplayReport> {
    let mut controls = Controls::new(overlay);
    if config.enabled.volume && !detached.volume {
        controls = controls.with_volume(&mut devices.volume);
    }
    if config.enabled.brightness && !detached.brightness {
        controls = controls.with_brightness(&mut devices.screen);
    }
    if config.enabled.playback && !detached.playback {
        controls = controls.with_playback(&mut devices.player);
    }

    let settings = DispatcherSettings::from_config(config);
    let mut dispatcher = ScrollDispatcher::new(settings, controls)?;
    for channel in Channel::ALL {
        if !dispatcher.is_enabled(channel) {
            println!("  ({channel} disabled)");
        }
    }

    let mut report = ReplayReport::default();
    for sample in samples {
        match *sample {
            GestureSample::Scroll { channel, distance } => {
                report.ticks += dispatcher.scroll(channel, distance)?;
            }
            GestureSample::Release => {
                dispatcher.reset_all();
                report.gestures += 1;
            }
        }
    }
    Ok(report)
}
