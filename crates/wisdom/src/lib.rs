//! # Wisdom Wheel
//!
//! The application crate, wiring the engine to its controls.
//!
//! ```text
//! ┌──────────────┐  SpinRequested   ┌──────────────┐  render   ┌──────────────┐
//! │   Controls   │─────────────────>│  FrameLoop   │──────────>│   Renderer   │
//! │ (stdin, CLI) │<─────────────────│ WheelEngine  │──────────>│  Presenter   │
//! └──────────────┘  SpinCompleted   └──────────────┘  present  └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: Control and outcome channels
//! - `game_loop`: Frame pacing and engine stepping

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]

pub mod events;
pub mod game_loop;

// Re-export the layers
pub use wisdom_core as core;
pub use wisdom_ui as ui;

// Re-export commonly used types
pub use events::{EventBus, EventReceiver, EventSender, EventSystem, WheelEvent};
pub use game_loop::{
    FrameClock, FrameLoop, FrameLoopConfig, FrameStats, FrameStatsAccumulator, LoopControl,
    ManualClock, SleepClock,
};
