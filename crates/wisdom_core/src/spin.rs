//! Wheel state and per-spin targets.

use std::time::Duration;

use crate::angle;
use crate::easing::Easing;

/// Rotation state of a wheel. Owned and mutated only by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelState {
    /// Cumulative rotation in radians. Never wrapped, never decreases.
    pub rotation: f64,
    /// True from spin start until the animation completes.
    pub spinning: bool,
}

/// A spin in flight: where it started, where it must land, and when.
///
/// Created when a spin starts, consumed once when the animation completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinTarget {
    /// Segment the wheel must stop on.
    pub target_index: usize,
    /// Full turns drawn for this spin.
    pub base_spins: f64,
    /// Rotation when the spin started.
    pub start_rotation: f64,
    /// Absolute rotation the animation ends on.
    pub final_rotation: f64,
    /// Frame timestamp of the spin request.
    pub started_at: Duration,
}

impl SpinTarget {
    /// Places a spin landing on `target_index` of a `segments` slice wheel.
    #[must_use]
    pub fn new(
        start_rotation: f64,
        base_spins: f64,
        target_index: usize,
        segments: usize,
        started_at: Duration,
    ) -> Self {
        Self {
            target_index,
            base_spins,
            start_rotation,
            final_rotation: angle::final_rotation(
                start_rotation,
                base_spins,
                target_index,
                segments,
            ),
            started_at,
        }
    }

    /// Linear progress in `[0, 1]` at frame time `now`.
    ///
    /// Timestamps before the start count as zero elapsed time.
    #[must_use]
    pub fn progress(&self, now: Duration, duration: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        let total = duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (elapsed.as_secs_f64() / total).min(1.0)
    }

    /// Rotation for a given linear progress.
    #[must_use]
    pub fn rotation_at(&self, progress: f64, easing: Easing) -> f64 {
        let eased = easing.apply(progress);
        self.start_rotation + (self.final_rotation - self.start_rotation) * eased
    }

    /// Total angle this spin covers.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.final_rotation - self.start_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_progress_clamps() {
        let target = SpinTarget::new(0.0, 4.0, 5, 12, Duration::from_millis(100));
        let duration = Duration::from_millis(3000);

        assert_eq!(target.progress(Duration::ZERO, duration), 0.0);
        assert_eq!(target.progress(Duration::from_millis(100), duration), 0.0);
        assert!((target.progress(Duration::from_millis(1600), duration) - 0.5).abs() < 1e-12);
        assert_eq!(target.progress(Duration::from_millis(3100), duration), 1.0);
        assert_eq!(target.progress(Duration::from_secs(60), duration), 1.0);
    }

    #[test]
    fn test_rotation_endpoints() {
        let target = SpinTarget::new(2.5, 4.2, 3, 8, Duration::ZERO);
        let easing = Easing::PowerOut(6);

        assert_eq!(target.rotation_at(0.0, easing), 2.5);
        assert!((target.rotation_at(1.0, easing) - target.final_rotation).abs() < 1e-12);
        assert!(target.travel() >= 4.2 * TAU - 1e-12);
        assert!(target.travel() < 5.2 * TAU);
    }
}
