//! # Wheel Spin Engine
//!
//! ```text
//! spin(now) ──► draw base spins + target ──► SpinTarget
//!                                                │
//! frame(now) ◄───────── every display refresh ───┘
//!   ├─ p < 1 : rotation = start + travel · ease(p) ──► Renderer
//!   └─ p = 1 : rotation = final (exact)           ──► Renderer
//!              spinning = false
//!              resolve(final) == target            ──► Presenter
//! ```
//!
//! Single threaded and cooperative: the caller owns the frame clock and calls
//! [`WheelEngine::frame`] once per refresh. A spin request while a spin is in
//! flight is dropped and leaves the state untouched.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::angle;
use crate::config::SpinConfig;
use crate::easing::Easing;
use crate::error::{WheelError, WheelResult};
use crate::segment::Wheel;
use crate::spin::{SpinTarget, WheelState};
use crate::surface::{Presenter, Renderer};

/// What happened to a spin request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinRequest {
    /// A new spin started.
    Started(SpinTarget),
    /// A spin was already in flight; the request was dropped.
    Ignored,
}

impl SpinRequest {
    /// Returns true if the request started a spin.
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Result of stepping one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// No spin in flight; nothing was drawn.
    Idle,
    /// Mid-animation frame.
    Spinning {
        /// Rotation drawn this frame.
        rotation: f64,
        /// Linear progress in `[0, 1)`.
        progress: f64,
    },
    /// The spin finished this frame.
    Completed {
        /// Segment under the marker.
        index: usize,
        /// Final rotation, snapped exactly to the target.
        rotation: f64,
    },
}

/// Owns the wheel state and drives spins to completion.
pub struct WheelEngine<R = ChaCha8Rng> {
    /// The segments on the wheel.
    wheel: Wheel,
    /// Spin parameters.
    config: SpinConfig,
    /// Easing derived from the config.
    easing: Easing,
    /// Rotation and spinning flag.
    state: WheelState,
    /// The spin in flight, if any.
    target: Option<SpinTarget>,
    /// Source of spin draws.
    rng: R,
    /// Spins that ran to completion.
    spins_completed: u64,
}

impl WheelEngine<ChaCha8Rng> {
    /// Creates an engine seeded from `config.seed`, or from entropy.
    ///
    /// # Errors
    ///
    /// Fails if the config does not validate.
    pub fn new(wheel: Wheel, config: SpinConfig) -> WheelResult<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(wheel, config, rng)
    }
}

impl<R: Rng> WheelEngine<R> {
    /// Creates an engine drawing spins from `rng`.
    ///
    /// # Errors
    ///
    /// Fails if the config does not validate.
    pub fn with_rng(wheel: Wheel, config: SpinConfig, rng: R) -> WheelResult<Self> {
        config.validate()?;
        let easing = config.easing();
        Ok(Self {
            wheel,
            config,
            easing,
            state: WheelState::default(),
            target: None,
            rng,
            spins_completed: 0,
        })
    }

    /// Requests a spin at frame time `now` with randomly drawn parameters.
    ///
    /// Dropped without side effects while a spin is in flight.
    pub fn spin(&mut self, now: Duration) -> SpinRequest {
        if self.state.spinning {
            tracing::debug!("Spin request dropped: wheel already spinning");
            return SpinRequest::Ignored;
        }

        let base_spins = self.rng.gen_range(self.config.min_spins..self.config.max_spins);
        let target_index = self.rng.gen_range(0..self.wheel.len());
        self.begin(now, base_spins, target_index)
    }

    /// Requests a spin landing on a chosen segment.
    ///
    /// Used for scripted demos and tests; follows the same in-flight rule as
    /// [`WheelEngine::spin`].
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::SegmentOutOfRange`] for an index past the wheel,
    /// or [`WheelError::InvalidConfig`] for negative or non-finite spins.
    pub fn spin_to(
        &mut self,
        now: Duration,
        target_index: usize,
        base_spins: f64,
    ) -> WheelResult<SpinRequest> {
        if target_index >= self.wheel.len() {
            return Err(WheelError::SegmentOutOfRange {
                index: target_index,
                len: self.wheel.len(),
            });
        }
        if !base_spins.is_finite() || base_spins < 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "base spins must be finite and >= 0, got {base_spins}"
            )));
        }
        if self.state.spinning {
            tracing::debug!("Scripted spin dropped: wheel already spinning");
            return Ok(SpinRequest::Ignored);
        }
        Ok(self.begin(now, base_spins, target_index))
    }

    fn begin(&mut self, now: Duration, base_spins: f64, target_index: usize) -> SpinRequest {
        let target = SpinTarget::new(
            self.state.rotation,
            base_spins,
            target_index,
            self.wheel.len(),
            now,
        );
        self.state.spinning = true;
        self.target = Some(target);

        tracing::info!(
            "Spin started: {:.2} turns over {} ms",
            target.travel() / std::f64::consts::TAU,
            self.config.duration_ms
        );
        tracing::debug!(
            "Spin target: segment {} at {:.4} rad",
            target_index,
            target.final_rotation
        );

        SpinRequest::Started(target)
    }

    /// Steps the animation to frame time `now`.
    ///
    /// Draws the frame, and on the last frame snaps the rotation, ends the
    /// spin and hands the selected segment to the presenter. If the renderer
    /// fails the spin stays in flight and the next frame retries.
    ///
    /// # Errors
    ///
    /// Propagates renderer and presenter failures.
    pub fn frame<V, P>(
        &mut self,
        now: Duration,
        renderer: &mut V,
        presenter: &mut P,
    ) -> WheelResult<FrameOutcome>
    where
        V: Renderer + ?Sized,
        P: Presenter + ?Sized,
    {
        let Some(target) = self.target else {
            return Ok(FrameOutcome::Idle);
        };

        let progress = target.progress(now, self.config.duration());
        if progress < 1.0 {
            let rotation = target.rotation_at(progress, self.easing);
            // Floating point must not walk the wheel backwards.
            self.state.rotation = rotation.max(self.state.rotation);
            renderer.render(self.state.rotation, self.wheel.segments())?;
            return Ok(FrameOutcome::Spinning {
                rotation: self.state.rotation,
                progress,
            });
        }

        self.state.rotation = target.final_rotation;
        renderer.render(self.state.rotation, self.wheel.segments())?;

        self.target = None;
        self.state.spinning = false;
        self.spins_completed += 1;

        let index = angle::resolve_segment(self.state.rotation, self.wheel.len());
        debug_assert_eq!(index, target.target_index, "marker resolution drifted from target");

        let segment = &self.wheel.segments()[index];
        tracing::info!("Wheel stopped on segment {} ({})", index, segment.reference);
        presenter.present(index, segment)?;

        Ok(FrameOutcome::Completed {
            index,
            rotation: self.state.rotation,
        })
    }

    /// Draws the wheel at rest, e.g. on startup or after a resize.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures.
    pub fn redraw<V: Renderer + ?Sized>(&self, renderer: &mut V) -> WheelResult<()> {
        renderer.render(self.state.rotation, self.wheel.segments())
    }

    /// Segment currently under the marker.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        angle::resolve_segment(self.state.rotation, self.wheel.len())
    }

    /// Current wheel state.
    #[must_use]
    pub fn state(&self) -> WheelState {
        self.state
    }

    /// The spin in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&SpinTarget> {
        self.target.as_ref()
    }

    /// Returns true while a spin is animating.
    #[inline]
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    /// The wheel's segments.
    #[must_use]
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// The active spin configuration.
    #[must_use]
    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Number of spins that ran to completion.
    #[must_use]
    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }
}
