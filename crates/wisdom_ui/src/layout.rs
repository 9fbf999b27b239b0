//! Wheel geometry for renderers.
//!
//! Everything a drawing backend needs to paint the wheel at a given
//! rotation: segment arcs, radial label lines and the marker.
//! Angles follow the canvas convention (clockwise, 0 pointing right).

use std::f64::consts::FRAC_PI_2;

/// Margin kept between the canvas edge and the rim.
pub const RIM_MARGIN: f64 = 8.0;

/// Padding the wheel leaves inside its container.
pub const CONTAINER_PADDING: f64 = 30.0;

/// Marker triangle size.
pub const MARKER_SIZE: f64 = 220.0;

/// Gap between the rim and the marker tip.
pub const MARKER_GAP: f64 = 5.0;

/// Radius of the round cap at the marker tip.
pub const MARKER_TIP_RADIUS: f64 = 15.0;

/// Radius of the white center hub.
pub const HUB_RADIUS: f64 = 80.0;

/// Radius of the emblem clipped inside the hub.
pub const HUB_EMBLEM_RADIUS: f64 = 75.0;

/// One segment as drawn at the current rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    /// Segment index.
    pub index: usize,
    /// Start angle on screen.
    pub start: f64,
    /// End angle on screen.
    pub end: f64,
}

impl SegmentArc {
    /// Bisector angle; labels run along it.
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// One wrapped line of a segment label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    /// Line text.
    pub text: String,
    /// Distance from the center along the bisector.
    pub radius: f64,
}

/// A placed label line: position and text rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Screen x.
    pub x: f64,
    /// Screen y.
    pub y: f64,
    /// Text rotation (perpendicular to the radius).
    pub rotation: f64,
}

/// The triangular marker, tip pointing left at the rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Tip touching the wheel.
    pub tip: (f64, f64),
    /// Upper back corner.
    pub top: (f64, f64),
    /// Lower back corner.
    pub bottom: (f64, f64),
    /// Radius of the cap drawn over the tip.
    pub tip_radius: f64,
}

/// Wheel geometry for a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    /// Center x.
    pub center_x: f64,
    /// Center y.
    pub center_y: f64,
    /// Rim radius.
    pub radius: f64,
}

impl WheelLayout {
    /// Fits the largest wheel into a container of the given CSS size.
    #[must_use]
    pub fn fit(container_width: f64, container_height: f64) -> Self {
        let size = (container_width - CONTAINER_PADDING)
            .min(container_height - CONTAINER_PADDING)
            .max(0.0);
        Self::square(size)
    }

    /// Layout for a square canvas of side `size`.
    #[must_use]
    pub fn square(size: f64) -> Self {
        Self {
            center_x: size / 2.0,
            center_y: size / 2.0,
            radius: (size / 2.0 - RIM_MARGIN).max(0.0),
        }
    }

    /// Screen arcs of all `segments` slices at `rotation`.
    #[must_use]
    pub fn segment_arcs(&self, rotation: f64, segments: usize) -> Vec<SegmentArc> {
        if segments == 0 {
            return Vec::new();
        }
        let seg = wisdom_core::angle::segment_angle(segments);
        (0..segments)
            .map(|index| SegmentArc {
                index,
                start: index as f64 * seg + rotation,
                end: (index + 1) as f64 * seg + rotation,
            })
            .collect()
    }

    /// Label font size, clamped to `[16, 20]`.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        (self.radius / 25.0).clamp(16.0, 20.0)
    }

    /// Longest label line in characters.
    #[must_use]
    pub fn max_chars_per_line(&self) -> usize {
        let chars = ((self.radius * 0.25) / (self.font_size() * 0.5)).floor();
        // Non-negative and small: radius is a canvas size.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let chars = chars.max(0.0) as usize;
        chars
    }

    /// Wraps `text` into lines running inward from 85% of the radius.
    ///
    /// Lines step inward by `font_size + 4`; text that would fall inside 40%
    /// of the radius is dropped.
    #[must_use]
    pub fn wrap_label(&self, text: &str) -> Vec<LabelLine> {
        let step = self.font_size() + 4.0;
        let min_radius = self.radius * 0.4;
        let max_chars = self.max_chars_per_line();

        let mut lines = Vec::new();
        let mut radius = self.radius * 0.85;
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate_len = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if candidate_len > max_chars && !current.is_empty() {
                lines.push(LabelLine {
                    text: std::mem::take(&mut current),
                    radius,
                });
                current.push_str(word);
                radius -= step;
                if radius < min_radius {
                    return lines;
                }
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }

        if !current.is_empty() && radius >= min_radius {
            lines.push(LabelLine { text: current, radius });
        }
        lines
    }

    /// Where a label line sits for a segment bisector at `angle`.
    #[must_use]
    pub fn place(&self, angle: f64, radius: f64) -> Placement {
        Placement {
            x: self.center_x + angle.cos() * radius,
            y: self.center_y + angle.sin() * radius,
            rotation: angle + FRAC_PI_2,
        }
    }

    /// Marker geometry on the right of the wheel.
    #[must_use]
    pub fn marker(&self) -> Marker {
        let tip_x = self.center_x + self.radius + MARKER_GAP;
        let back_x = tip_x + MARKER_SIZE;
        Marker {
            tip: (tip_x, self.center_y),
            top: (back_x, self.center_y - MARKER_SIZE / 2.0),
            bottom: (back_x, self.center_y + MARKER_SIZE / 2.0),
            tip_radius: MARKER_TIP_RADIUS,
        }
    }

    /// Center hub radius, never larger than the wheel itself.
    #[must_use]
    pub fn hub_radius(&self) -> f64 {
        HUB_RADIUS.min(self.radius)
    }

    /// Emblem radius inside the hub.
    #[must_use]
    pub fn hub_emblem_radius(&self) -> f64 {
        HUB_EMBLEM_RADIUS.min(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_fit_uses_smaller_side() {
        let layout = WheelLayout::fit(830.0, 630.0);
        assert_eq!(layout.center_x, 300.0);
        assert_eq!(layout.radius, 292.0);
        assert_eq!(WheelLayout::fit(10.0, 10.0).radius, 0.0);
    }

    #[test]
    fn test_arcs_cover_the_circle() {
        let layout = WheelLayout::square(600.0);
        let arcs = layout.segment_arcs(1.0, 12);
        assert_eq!(arcs.len(), 12);
        assert_eq!(arcs[0].start, 1.0);
        assert!((arcs[11].end - (1.0 + TAU)).abs() < 1e-12);
        for pair in arcs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(layout.segment_arcs(0.0, 0).is_empty());
    }

    #[test]
    fn test_font_and_line_length() {
        let small = WheelLayout::square(300.0);
        assert_eq!(small.font_size(), 16.0);
        assert_eq!(small.max_chars_per_line(), 4);

        let large = WheelLayout::square(1200.0);
        assert_eq!(large.font_size(), 20.0);
        assert_eq!(large.max_chars_per_line(), 14);
    }

    #[test]
    fn test_wrap_respects_width_and_floor() {
        let layout = WheelLayout::square(1200.0);
        let lines = layout.wrap_label(
            "You have the right to perform your prescribed duty, but not to the fruits of action",
        );

        assert!(!lines.is_empty());
        assert_eq!(lines[0].text, "You have the");
        assert_eq!(lines[0].radius, layout.radius * 0.85);
        for line in &lines {
            assert!(line.radius >= layout.radius * 0.4);
        }
        for pair in lines.windows(2) {
            assert!((pair[0].radius - pair[1].radius - (layout.font_size() + 4.0)).abs() < 1e-9);
        }
        // Single words longer than the limit still get their own line.
        assert!(lines.iter().all(|l| l.text.len() <= 14 || !l.text.contains(' ')));
    }

    #[test]
    fn test_wrap_drops_overflow() {
        let layout = WheelLayout::square(300.0);
        let lines = layout.wrap_label("one two three four five six seven eight nine ten eleven");
        let min = layout.radius * 0.4;
        assert!(lines.iter().all(|l| l.radius >= min));
        assert!(lines.len() < 11);
    }

    #[test]
    fn test_marker_points_at_rim() {
        let layout = WheelLayout::square(600.0);
        let marker = layout.marker();
        assert_eq!(marker.tip, (300.0 + 292.0 + 5.0, 300.0));
        assert_eq!(marker.top.1, 300.0 - 110.0);
        assert_eq!(marker.tip_radius, 15.0);
    }

    #[test]
    fn test_hub_fits_small_wheels() {
        assert_eq!(WheelLayout::square(600.0).hub_radius(), 80.0);
        assert_eq!(WheelLayout::square(600.0).hub_emblem_radius(), 75.0);
        assert_eq!(WheelLayout::square(116.0).hub_radius(), 50.0);
    }

    #[test]
    fn test_place_on_bisector() {
        let layout = WheelLayout::square(600.0);
        let placed = layout.place(0.0, 100.0);
        assert_eq!((placed.x, placed.y), (400.0, 300.0));
        assert_eq!(placed.rotation, FRAC_PI_2);
    }
}
