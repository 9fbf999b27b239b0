//! Colors, segment palettes and page themes.

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Creates a color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a hex value (0xRRGGBB).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Bold 24-bit ANSI foreground escape for this color.
    #[must_use]
    pub fn ansi_bold(self) -> String {
        format!("\x1b[1;38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Radial gradient stops for one wheel segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentColors {
    /// Color near the hub, also used for the result message.
    pub inner: Color,
    /// Darker color at the rim.
    pub outer: Color,
}

/// Per-segment colors, cycled when the wheel has more segments than entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<SegmentColors>,
}

impl Palette {
    /// Colors for segment `index`.
    #[must_use]
    pub fn for_segment(&self, index: usize) -> SegmentColors {
        self.entries[index % self.entries.len()]
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = WHEEL_INNER
            .iter()
            .zip(WHEEL_OUTER.iter())
            .map(|(&inner, &outer)| SegmentColors {
                inner: Color::hex(inner),
                outer: Color::hex(outer),
            })
            .collect();
        Self { entries }
    }
}

const WHEEL_INNER: [u32; 12] = [
    0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0x96CEB4,
    0xFFEAA7, 0xDDA0DD, 0x98D8C8, 0xF7DC6F,
    0xBB8FCE, 0x85C1E9, 0xF8C471, 0x82E0AA,
];

const WHEEL_OUTER: [u32; 12] = [
    0xE74C3C, 0x16A085, 0x2980B9, 0x27AE60,
    0xF39C12, 0x8E44AD, 0x1ABC9C, 0xE67E22,
    0x9B59B6, 0x3498DB, 0xD68910, 0x58D68D,
];

/// Page colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background, behind the wheel.
    pub background: Color,
    /// Muted text (citations, hints).
    pub text_muted: Color,
    /// Accent for buttons and the marker outline.
    pub accent: Color,
}

impl Theme {
    /// Light page theme.
    pub const LIGHT: Self = Self {
        background: Color::hex(0xF8F9FA),
        text_muted: Color::hex(0x6C757D),
        accent: Color::hex(0xFF6B35),
    };

    /// Dark page theme.
    pub const DARK: Self = Self {
        background: Color::hex(0x1A1A2E),
        text_muted: Color::hex(0xA0A0B0),
        accent: Color::hex(0xF7931E),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_and_ansi() {
        let color = Color::hex(0xFF6B6B);
        assert_eq!(color, Color::rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(Color::WHITE, Color::rgb(255, 255, 255));
        assert_eq!(color.ansi_bold(), "\x1b[1;38;2;255;107;107m");
    }

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.for_segment(0).inner, Color::hex(0xFF6B6B));
        assert_eq!(palette.for_segment(11).outer, Color::hex(0x58D68D));
        assert_eq!(palette.for_segment(13), palette.for_segment(1));
    }
}
