//! Collaborator interfaces: who draws the wheel and who shows the result.
//!
//! The engine never touches a display directly. Failures returned by these
//! traits propagate out of [`crate::WheelEngine::frame`] unchanged.

use crate::error::WheelResult;
use crate::segment::Segment;

/// Draws the wheel. Called once per animation frame.
pub trait Renderer {
    /// Draws the wheel at `rotation` radians.
    ///
    /// # Errors
    ///
    /// Implementations report drawing failures as [`crate::WheelError::Render`].
    fn render(&mut self, rotation: f64, segments: &[Segment]) -> WheelResult<()>;
}

/// Displays the selected segment. Called exactly once per completed spin.
pub trait Presenter {
    /// Shows the segment the wheel stopped on.
    ///
    /// # Errors
    ///
    /// Implementations report display failures as [`crate::WheelError::Present`].
    fn present(&mut self, index: usize, segment: &Segment) -> WheelResult<()>;
}
