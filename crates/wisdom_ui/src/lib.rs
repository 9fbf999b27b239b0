//! # Wisdom Wheel Presentation Surface
//!
//! Everything between the spin engine and a pair of eyes:
//! - Segment palettes and light/dark page themes
//! - Wheel geometry (arcs, radial labels, marker)
//! - Theme preference persistence
//! - Renderer and presenter implementations for the engine traits
//!
//! ## Pipeline
//!
//! ```text
//! rotation ──► WheelLayout ──► WheelPainter ──► RenderCommand list ──► backend
//! segment  ──► ConsolePresenter ──► terminal
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod layout;
pub mod render;
pub mod style;
pub mod theme;

pub use error::{UiError, UiResult};
pub use layout::{LabelLine, Marker, Placement, SegmentArc, WheelLayout};
pub use render::{CommandRenderer, ConsolePresenter, RenderCommand, TextRenderer, WheelPainter};
pub use style::{Color, Palette, SegmentColors, Theme};
pub use theme::{ThemeMode, ThemeStore};
