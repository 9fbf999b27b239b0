//! # Wheel Angle Math
//!
//! Forward placement of a spin target and the inverse marker resolution.
//!
//! ## Frame Conventions
//!
//! ```text
//!                 screen (canvas, y down)
//!
//!                         -π/2
//!                          │
//!              π ──────────●────────── 0  ◄── MARKER
//!                          │
//!                         π/2
//! ```
//!
//! - Segment `i` covers `[i·seg, (i+1)·seg)` in the wheel's own frame.
//! - The wheel is drawn with every angle offset by `+rotation`.
//! - The wheel-frame angle under the marker is `(-rotation) mod 2π`.
//!
//! [`final_rotation`] and [`resolve_segment`] are exact inverses: resolving a
//! placed rotation returns the target index for every start rotation and
//! every (fractional) number of base spins.

use std::f64::consts::TAU;

/// Screen angle of the fixed marker (pointing right).
pub const MARKER_ANGLE: f64 = 0.0;

/// Wraps an angle into `[0, 2π)`.
///
/// Follows `((a mod 2π) + 2π) mod 2π` so negative inputs and rounding that
/// lands exactly on `2π` both come back inside the range.
#[inline]
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Angular width of one segment for a wheel of `segments` slices.
///
/// `segments` must be non-zero; callers go through [`crate::Wheel`], which
/// refuses empty wheels at construction.
#[inline]
#[must_use]
pub fn segment_angle(segments: usize) -> f64 {
    debug_assert!(segments > 0, "segment_angle on an empty wheel");
    TAU / segments as f64
}

/// Wheel-frame angle of the middle of segment `index`.
#[inline]
#[must_use]
pub fn segment_center(index: usize, segments: usize) -> f64 {
    let seg = segment_angle(segments);
    index as f64 * seg + seg / 2.0
}

/// Computes the absolute rotation at which `target_index` sits under the marker.
///
/// The spin covers `base_spins` full turns plus the forward offset needed to
/// bring the target's center under the marker, so the travel is always in
/// `[base_spins, base_spins + 1)` turns and the rotation never decreases.
#[must_use]
pub fn final_rotation(
    current_rotation: f64,
    base_spins: f64,
    target_index: usize,
    segments: usize,
) -> f64 {
    let center = segment_center(target_index, segments);
    let travelled = current_rotation + base_spins * TAU;

    // Rotation phase that puts `center` under the marker: -phase ≡ center - MARKER_ANGLE.
    let wanted_phase = normalize(MARKER_ANGLE - center);
    let offset = normalize(wanted_phase - normalize(travelled));

    travelled + offset
}

/// Resolves the segment index currently under the marker.
#[must_use]
pub fn resolve_segment(rotation: f64, segments: usize) -> usize {
    let normalized = normalize(rotation);
    let marker_angle = normalize(MARKER_ANGLE - normalized);

    // Flooring a value in [0, 2π) by a positive width stays in [0, N].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (marker_angle / segment_angle(segments)).floor() as usize;

    index % segments
}
