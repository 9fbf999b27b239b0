//! # Marker Alignment Verification
//!
//! The forward placement of a spin and the inverse marker resolution must be
//! exact inverses, whatever the wheel size, start rotation or spin count.
//!
//! Run with: cargo test --package wisdom_core --test marker_alignment_test

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{PI, TAU};
use wisdom_core::angle::{final_rotation, normalize, resolve_segment, segment_angle};

#[test]
fn verify_identity_random_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    for _ in 0..100_000 {
        let segments = rng.gen_range(1..=64_usize);
        let target = rng.gen_range(0..segments);
        let start = rng.gen_range(0.0..10_000.0);
        let base = rng.gen_range(0.0..12.0);

        let rotation = final_rotation(start, base, target, segments);

        assert_eq!(
            resolve_segment(rotation, segments),
            target,
            "n={segments} target={target} start={start} base={base}"
        );
        assert!(rotation >= start);
    }
}

#[test]
fn verify_target_lands_on_segment_center() {
    for segments in [1_usize, 2, 3, 7, 12, 37] {
        let seg = segment_angle(segments);
        for target in 0..segments {
            let rotation = final_rotation(1.75, 4.0, target, segments);
            // Wheel-frame angle under the marker.
            let under_marker = normalize(-rotation);
            let center = target as f64 * seg + seg / 2.0;
            assert!(
                (under_marker - center).abs() < 1e-9,
                "n={segments} target={target}: {under_marker} vs {center}"
            );
        }
    }
}

#[test]
fn verify_twelve_segment_scenario() {
    let rotation = final_rotation(0.0, 4.0, 5, 12);

    assert_eq!(resolve_segment(rotation, 12), 5);
    assert!((8.0 * PI..10.0 * PI).contains(&rotation));
}

#[test]
fn verify_degenerate_wheel() {
    assert_eq!(segment_angle(1), TAU);
    for start in [0.0, 1.0, 3.3, 100.0] {
        for base in [4.0, 5.25, 6.9] {
            assert_eq!(resolve_segment(final_rotation(start, base, 0, 1), 1), 0);
        }
    }
}
