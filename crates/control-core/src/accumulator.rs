//! Distance-to-step quantization.
//!
//! A [`StepAccumulator`] sums signed drag distances and drains every whole
//! unit distance as one [`Tick`]. Whatever is left over stays in the running
//! total, so slow drags made of many sub-unit samples step exactly as often
//! as one fast flick covering the same distance.

use std::convert::Infallible;

use swipectl_common::error::{SwipeError, SwipeResult};

/// Most ticks a single sample may emit. Whole units beyond this are dropped,
/// which also bounds the work done for absurdly large deltas.
pub const MAX_TICKS_PER_ADD: usize = 10_000;

/// One discrete step emitted when the running total crosses a unit boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Running total before this unit was drained.
    pub old_total: f64,
    /// Running total after this unit was drained.
    pub new_total: f64,
    /// `+1` or `-1`.
    pub direction: i32,
}

/// Single-channel distance quantizer.
///
/// After every call to [`add`](Self::add) or [`try_add`](Self::try_add)
/// returns, `|total| < unit_distance`.
#[derive(Debug, Clone)]
pub struct StepAccumulator {
    unit_distance: f64,
    total: f64,
}

impl StepAccumulator {
    /// Create an accumulator that ticks once per `unit_distance`.
    ///
    /// Fails if `unit_distance` is not finite or not strictly positive.
    pub fn new(unit_distance: f64) -> SwipeResult<Self> {
        if !unit_distance.is_finite() || unit_distance <= 0.0 {
            return Err(SwipeError::invalid_unit_distance(
                "step accumulator",
                unit_distance,
            ));
        }
        Ok(Self {
            unit_distance,
            total: 0.0,
        })
    }

    /// Distance that makes up one tick.
    pub fn unit_distance(&self) -> f64 {
        self.unit_distance
    }

    /// Current sub-unit remainder.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Add `delta` and call `on_tick` once per unit crossed, in order, up to
    /// [`MAX_TICKS_PER_ADD`].
    ///
    /// Returns the number of ticks emitted.
    pub fn add(&mut self, delta: f64, mut on_tick: impl FnMut(Tick)) -> usize {
        let result = self.try_add(delta, |tick| {
            on_tick(tick);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(ticks) => ticks,
            Err(never) => match never {},
        }
    }

    /// Like [`add`](Self::add), but `on_tick` may fail.
    ///
    /// The first error stops draining and is returned. Whole units that were
    /// not yet drained are dropped, keeping only the signed fractional part.
    pub fn try_add<E>(
        &mut self,
        delta: f64,
        mut on_tick: impl FnMut(Tick) -> Result<(), E>,
    ) -> Result<usize, E> {
        if !delta.is_finite() {
            tracing::warn!(delta, "Ignoring non-finite scroll delta");
            return Ok(0);
        }

        self.total += delta;

        let mut ticks = 0;
        while self.total.abs() >= self.unit_distance && ticks < MAX_TICKS_PER_ADD {
            let direction: i32 = if self.total > 0.0 { 1 } else { -1 };
            let old_total = self.total;
            self.total -= f64::from(direction) * self.unit_distance;
            ticks += 1;

            let tick = Tick {
                old_total,
                new_total: self.total,
                direction,
            };
            if let Err(e) = on_tick(tick) {
                self.total %= self.unit_distance;
                return Err(e);
            }
        }

        if ticks == MAX_TICKS_PER_ADD && self.total.abs() >= self.unit_distance {
            tracing::warn!(
                total = self.total,
                unit = self.unit_distance,
                "Tick limit reached, dropping excess whole units"
            );
            self.total %= self.unit_distance;
        }
        Ok(ticks)
    }

    /// Drop the remainder without emitting anything.
    pub fn reset(&mut self) {
        self.total = 0.0;
    }
}
