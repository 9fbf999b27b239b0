//! Ease-out curves for the spin animation.
//!
//! The wheel uses a high power ease-out: most of the distance is covered in
//! the first third of the spin, then a long readable deceleration tail.

/// Default exponent of the spin ease-out.
pub const DEFAULT_POWER: u32 = 6;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed; what a power of one reduces to.
    Linear,
    /// Power ease-out: `1 - (1 - t)^power`.
    PowerOut(u32),
}

impl Default for Easing {
    fn default() -> Self {
        Self::PowerOut(DEFAULT_POWER)
    }
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    ///
    /// Inputs outside `[0, 1]` are clamped, so `apply(0) == 0` and
    /// `apply(1) == 1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::PowerOut(power) => {
                let exponent = i32::try_from(power).unwrap_or(i32::MAX);
                1.0 - (1.0 - t).powi(exponent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_out_endpoints() {
        let easing = Easing::default();
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(7.0), 1.0);
    }

    #[test]
    fn test_power_out_monotonic() {
        let curves = [
            Easing::Linear,
            Easing::PowerOut(2),
            Easing::PowerOut(6),
            Easing::PowerOut(11),
        ];
        for easing in curves {
            let mut previous = easing.apply(0.0);
            for step in 1..=10_000 {
                let value = easing.apply(f64::from(step) / 10_000.0);
                assert!(value >= previous, "{easing:?} decreased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_sextic_is_front_loaded() {
        // A third of the way in, the wheel has covered over 90% of its travel.
        let value = Easing::PowerOut(6).apply(1.0 / 3.0);
        assert!(value > 0.9, "sextic ease-out should front-load travel: {value}");
        assert!((Easing::PowerOut(6).apply(0.5) - (1.0 - 0.5_f64.powi(6))).abs() < 1e-15);
    }
}
