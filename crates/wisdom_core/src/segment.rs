//! # Segments and the Quotation Catalog
//!
//! A [`Wheel`] is a fixed, ordered, non-empty list of [`Segment`]s. The spin
//! math only ever sees indices; the payload is carried for the presenter.
//!
//! Catalogs are loaded from TOML:
//!
//! ```toml
//! [[segments]]
//! text = "Rise up with your own efforts; do not degrade yourself"
//! reference = "BG 6.5"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle;
use crate::error::{WheelError, WheelResult};

/// One slice of the wheel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Message text shown when this segment is selected.
    pub text: String,
    /// Citation for the message.
    pub reference: String,
}

impl Segment {
    /// Creates a segment.
    #[must_use]
    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: reference.into(),
        }
    }
}

/// The ordered segment list of a wheel. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wheel {
    segments: Vec<Segment>,
}

impl Wheel {
    /// Creates a wheel from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::EmptyWheel`] if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> WheelResult<Self> {
        if segments.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        Ok(Self { segments })
    }

    /// Number of segments (always at least 1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Angular width of one segment.
    #[inline]
    #[must_use]
    pub fn segment_angle(&self) -> f64 {
        angle::segment_angle(self.len())
    }

    /// All segments in wheel order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the segment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Parses a catalog TOML document.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or a catalog with no segments.
    pub fn from_toml_str(source: &str) -> WheelResult<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.segments)
    }

    /// Loads a catalog TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WheelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let wheel = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded {} segments from {}", wheel.len(), path.display());
        Ok(wheel)
    }

    /// The built-in twelve verse catalog.
    #[must_use]
    pub fn bhagavad_gita() -> Self {
        let segments = GITA_VERSES
            .iter()
            .map(|(text, reference)| Segment::new(*text, *reference))
            .collect();
        Self { segments }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::bhagavad_gita()
    }
}

/// On-disk catalog layout.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    segments: Vec<Segment>,
}

const GITA_VERSES: [(&str, &str); 12] = [
    (
        "You have the right to perform your prescribed duty, but not to the fruits of action",
        "BG 2.47",
    ),
    ("The soul is neither born, and nor does it die; it is unborn, eternal, permanent", "BG 2.20"),
    (
        "Better is one's own dharma, though imperfectly performed, than the dharma of another",
        "BG 3.35",
    ),
    ("The mind is restless, but it can be controlled by practice and detachment", "BG 6.35"),
    ("One who sees inaction in action, and action in inaction, is wise among men", "BG 4.18"),
    ("Whatever you do, whatever you eat, offer it all to the Divine", "BG 9.27"),
    ("I am the same to all beings; none are dear to Me, nor do I dislike anyone", "BG 9.29"),
    ("Abandon all varieties of dharma and surrender unto Me alone", "BG 18.66"),
    ("Those who worship Me with devotion, I reside in their hearts", "BG 9.29"),
    (
        "When meditation is mastered, the mind is unwavering like a flame in a windless place",
        "BG 6.19",
    ),
    ("Rise up with your own efforts; do not degrade yourself", "BG 6.5"),
    ("I am Time, the destroyer and creator of worlds", "BG 11.32"),
];
