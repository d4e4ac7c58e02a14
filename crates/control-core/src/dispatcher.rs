//! Four-channel scroll dispatcher.
//!
//! Owns one [`StepAccumulator`] per channel and routes each drained tick
//! through the matching policy in [`crate::policy`].

use swipectl_common::config::{SwipeControlsConfig, UnitDistances};
use swipectl_common::error::{SwipeError, SwipeResult};
use swipectl_gesture_model::Channel;

use crate::accumulator::StepAccumulator;
use crate::controls::Controls;
use crate::policy;

/// Resolved dispatcher parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatcherSettings {
    /// Pixels per tick, per channel.
    pub unit_distances: UnitDistances,
    /// Volume levels per volume tick.
    pub volume_sensitivity: i32,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self::from_config(&SwipeControlsConfig::default())
    }
}

impl DispatcherSettings {
    /// Resolve dp distances to pixels using the configured display density.
    pub fn from_config(config: &SwipeControlsConfig) -> Self {
        Self {
            unit_distances: config.unit_distances_px(),
            volume_sensitivity: i32::try_from(config.volume_sensitivity).unwrap_or(i32::MAX),
        }
    }
}

/// Routes per-channel drag distances to device changes and overlay updates.
pub struct ScrollDispatcher<'a> {
    volume: StepAccumulator,
    brightness: StepAccumulator,
    speed: StepAccumulator,
    seek: StepAccumulator,
    volume_sensitivity: i32,
    controls: Controls<'a>,
}

impl<'a> ScrollDispatcher<'a> {
    /// Build a dispatcher for one overlay session.
    ///
    /// Fails if any unit distance is not finite and strictly positive.
    pub fn new(settings: DispatcherSettings, controls: Controls<'a>) -> SwipeResult<Self> {
        let distances = settings.unit_distances;
        let dispatcher = Self {
            volume: channel_accumulator(Channel::Volume, distances.volume)?,
            brightness: channel_accumulator(Channel::Brightness, distances.brightness)?,
            speed: channel_accumulator(Channel::Speed, distances.speed)?,
            seek: channel_accumulator(Channel::Seek, distances.seek)?,
            volume_sensitivity: settings.volume_sensitivity,
            controls,
        };

        tracing::info!(
            volume = dispatcher.is_enabled(Channel::Volume),
            brightness = dispatcher.is_enabled(Channel::Brightness),
            playback = dispatcher.is_enabled(Channel::Speed),
            "Scroll dispatcher ready"
        );
        Ok(dispatcher)
    }

    /// Submit a drag distance for `channel`. Returns the number of ticks
    /// applied.
    ///
    /// A device error stops the current sample; it is returned unchanged.
    pub fn scroll(&mut self, channel: Channel, distance: f64) -> SwipeResult<usize> {
        tracing::trace!(%channel, distance, "Scroll sample");

        let Self {
            volume,
            brightness,
            speed,
            seek,
            volume_sensitivity,
            controls,
        } = self;
        let accumulator = match channel {
            Channel::Volume => volume,
            Channel::Brightness => brightness,
            Channel::Speed => speed,
            Channel::Seek => seek,
        };

        accumulator.try_add(distance, |tick| {
            tracing::debug!(
                %channel,
                direction = tick.direction,
                old_total = tick.old_total,
                new_total = tick.new_total,
                "Tick"
            );
            policy::apply(channel, tick.direction, *volume_sensitivity, controls)
        })
    }

    pub fn scroll_volume(&mut self, distance: f64) -> SwipeResult<usize> {
        self.scroll(Channel::Volume, distance)
    }

    pub fn scroll_brightness(&mut self, distance: f64) -> SwipeResult<usize> {
        self.scroll(Channel::Brightness, distance)
    }

    pub fn scroll_speed(&mut self, distance: f64) -> SwipeResult<usize> {
        self.scroll(Channel::Speed, distance)
    }

    pub fn scroll_seek(&mut self, distance: f64) -> SwipeResult<usize> {
        self.scroll(Channel::Seek, distance)
    }

    /// Forget sub-threshold distance on every channel (gesture ended).
    pub fn reset_all(&mut self) {
        self.volume.reset();
        self.brightness.reset();
        self.speed.reset();
        self.seek.reset();
        tracing::trace!("Scroll remainders reset");
    }

    /// Whether a device is attached for `channel`.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Volume => self.controls.volume.is_some(),
            Channel::Brightness => self.controls.brightness.is_some(),
            Channel::Speed | Channel::Seek => self.controls.playback.is_some(),
        }
    }

    /// Sub-unit distance currently carried by `channel`.
    pub fn remainder(&self, channel: Channel) -> f64 {
        self.accumulator(channel).total()
    }

    fn accumulator(&self, channel: Channel) -> &StepAccumulator {
        match channel {
            Channel::Volume => &self.volume,
            Channel::Brightness => &self.brightness,
            Channel::Speed => &self.speed,
            Channel::Seek => &self.seek,
        }
    }
}

fn channel_accumulator(channel: Channel, unit_distance: f64) -> SwipeResult<StepAccumulator> {
    StepAccumulator::new(unit_distance)
        .map_err(|_| SwipeError::invalid_unit_distance(channel.as_str(), unit_distance))
}
