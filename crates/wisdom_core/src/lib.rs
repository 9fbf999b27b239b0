//! # Wisdom Wheel Spin Engine
//!
//! Pure Rust spin logic for the wisdom wheel mini-game.
//!
//! ## Design Principles
//!
//! 1. **Target first** - the landing segment is drawn before the animation starts
//! 2. **Exact inverse** - resolving the final rotation returns the drawn target
//! 3. **No display code** - drawing and messages go through [`Renderer`] and [`Presenter`]
//! 4. **External configuration** - spin tuning and catalogs live in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use wisdom_core::{SpinConfig, Wheel, WheelEngine};
//!
//! let mut engine = WheelEngine::new(Wheel::bhagavad_gita(), SpinConfig::default())?;
//! engine.spin(now);
//! // once per display refresh:
//! engine.frame(now, &mut renderer, &mut presenter)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod angle;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod segment;
pub mod spin;
pub mod surface;

pub use config::SpinConfig;
pub use easing::Easing;
pub use engine::{FrameOutcome, SpinRequest, WheelEngine};
pub use error::{WheelError, WheelResult};
pub use segment::{Segment, Wheel};
pub use spin::{SpinTarget, WheelState};
pub use surface::{Presenter, Renderer};
