//! # Wisdom Wheel Frame Loop
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. DRAIN CONTROLS                                                   │
//! │    ├─ SpinRequested → engine.spin(now) → SpinStarted / SpinIgnored  │
//! │    └─ Quit          → finish the spin in flight, then stop          │
//! │                                                                     │
//! │ 2. ENGINE FRAME                                                     │
//! │    ├─ Renderer draws the wheel at the eased rotation                │
//! │    └─ On the last frame: Presenter shows the verse, SpinCompleted   │
//! │                                                                     │
//! │ 3. END FRAME                                                        │
//! │    └─ Record timing, wait for the next display refresh              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single threaded. The clock's `wait_next_frame` is the only suspension
//! point; everything else runs to completion inside [`FrameLoop::step`].

use std::thread;
use std::time::{Duration, Instant};

use wisdom_core::{FrameOutcome, Presenter, Renderer, SpinRequest, WheelEngine, WheelResult};

use crate::events::{EventReceiver, EventSender, WheelEvent};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Maximum allowed frame time before warning.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(33);

/// The host's "next display refresh" primitive.
pub trait FrameClock {
    /// Time since the loop started. Never decreases.
    fn now(&self) -> Duration;

    /// Suspends until the next frame is due.
    fn wait_next_frame(&mut self);
}

/// Wall-clock frame pacing with `thread::sleep`.
#[derive(Debug)]
pub struct SleepClock {
    origin: Instant,
    frame_time: Duration,
    next_frame: Instant,
}

impl SleepClock {
    /// Creates a clock pacing frames at `target_fps`.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let origin = Instant::now();
        Self {
            origin,
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            next_frame: origin,
        }
    }

    /// Time budget of one frame.
    #[must_use]
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

impl FrameClock for SleepClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_next_frame(&mut self) {
        self.next_frame += self.frame_time;
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
        } else {
            // Fell behind; do not try to catch up with a burst of frames.
            self.next_frame = now;
        }
    }
}

/// Deterministic clock: each wait advances time by a fixed step.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Duration,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock at zero advancing `step` per frame.
    #[must_use]
    pub fn new(step: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            step,
        }
    }

    /// Moves time forward without waiting for a frame.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(TARGET_FRAME_TIME)
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait_next_frame(&mut self) {
        self.now += self.step;
    }
}

/// Configuration for the frame loop.
#[derive(Clone, Debug)]
pub struct FrameLoopConfig {
    /// Warn about frames slower than [`MAX_FRAME_TIME`].
    pub enable_timing_logs: bool,
    /// Target frames per second.
    pub target_fps: u32,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            enable_timing_logs: false,
            target_fps: 60,
        }
    }
}

/// Whether the loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another frame.
    Continue,
    /// Quit was requested and no spin is in flight.
    Quit,
}

/// Frame timing statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Frame number.
    pub frame: u64,
    /// Time spent inside the step, in microseconds.
    pub total_us: u64,
    /// Control events handled this frame.
    pub events_processed: u32,
}

/// Drives a [`WheelEngine`] from a [`FrameClock`] and the control channel.
pub struct FrameLoop<C: FrameClock> {
    engine: WheelEngine,
    clock: C,
    requests: EventReceiver,
    outcomes: EventSender,
    config: FrameLoopConfig,
    frame_count: u64,
    quit_requested: bool,
    stats: FrameStatsAccumulator,
}

impl<C: FrameClock> FrameLoop<C> {
    /// Creates a loop reading controls from `requests` and publishing to `outcomes`.
    #[must_use]
    pub fn new(
        engine: WheelEngine,
        clock: C,
        requests: EventReceiver,
        outcomes: EventSender,
        config: FrameLoopConfig,
    ) -> Self {
        Self {
            engine,
            clock,
            requests,
            outcomes,
            config,
            frame_count: 0,
            quit_requested: false,
            stats: FrameStatsAccumulator::new(),
        }
    }

    /// Runs one frame.
    ///
    /// # Errors
    ///
    /// Propagates renderer and presenter failures from the engine.
    pub fn step<V, P>(&mut self, renderer: &mut V, presenter: &mut P) -> WheelResult<LoopControl>
    where
        V: Renderer + ?Sized,
        P: Presenter + ?Sized,
    {
        let started = Instant::now();
        let now = self.clock.now();
        let mut events_processed = 0_u32;

        for event in self.requests.drain() {
            events_processed += 1;
            match event {
                WheelEvent::SpinRequested => match self.engine.spin(now) {
                    SpinRequest::Started(_) => {
                        self.outcomes.send(WheelEvent::SpinStarted);
                    }
                    SpinRequest::Ignored => {
                        self.outcomes.send(WheelEvent::SpinIgnored);
                    }
                },
                WheelEvent::Quit => self.quit_requested = true,
                other => tracing::debug!("Frame loop ignoring {:?}", other),
            }
        }

        let outcome = self.engine.frame(now, renderer, presenter);

        // Failed frames still count towards the frame total and timing.
        let total_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.end_frame(FrameStats {
            frame: self.frame_count,
            total_us,
            events_processed,
        });

        if let FrameOutcome::Completed { index, .. } = outcome? {
            let reference = self
                .engine
                .wheel()
                .get(index)
                .map(|segment| segment.reference.clone())
                .unwrap_or_default();
            self.outcomes.send(WheelEvent::SpinCompleted { index, reference });
        }

        if self.quit_requested && !self.engine.is_spinning() {
            return Ok(LoopControl::Quit);
        }
        Ok(LoopControl::Continue)
    }

    /// Waits for the next frame on the clock.
    pub fn wait_next_frame(&mut self) {
        self.clock.wait_next_frame();
    }

    /// Runs frames until quit is requested and the wheel is at rest.
    ///
    /// # Errors
    ///
    /// Propagates renderer and presenter failures.
    pub fn run<V, P>(&mut self, renderer: &mut V, presenter: &mut P) -> WheelResult<()>
    where
        V: Renderer + ?Sized,
        P: Presenter + ?Sized,
    {
        self.engine.redraw(renderer)?;
        while self.step(renderer, presenter)? == LoopControl::Continue {
            self.wait_next_frame();
        }
        tracing::info!(
            "Frame loop stopped after {} frames, {} spins",
            self.frame_count,
            self.engine.spins_completed()
        );
        Ok(())
    }

    /// Runs frames until the spin in flight (or one requested this frame)
    /// completes. Returns `None` if no spin was running.
    ///
    /// # Errors
    ///
    /// Propagates renderer and presenter failures.
    pub fn run_until_complete<V, P>(
        &mut self,
        renderer: &mut V,
        presenter: &mut P,
    ) -> WheelResult<Option<usize>>
    where
        V: Renderer + ?Sized,
        P: Presenter + ?Sized,
    {
        let before = self.engine.spins_completed();
        self.step(renderer, presenter)?;
        if !self.engine.is_spinning() && self.engine.spins_completed() == before {
            return Ok(None);
        }
        while self.engine.is_spinning() {
            self.wait_next_frame();
            self.step(renderer, presenter)?;
        }
        Ok(Some(self.engine.selected_index()))
    }

    fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        self.stats.record(stats);

        if self.config.enable_timing_logs && stats.total_us > duration_us(MAX_FRAME_TIME) {
            tracing::warn!(
                "Frame {} exceeded budget: {:.2}ms (target: {:.2}ms)",
                stats.frame,
                stats.total_us as f64 / 1000.0,
                1000.0 / f64::from(self.config.target_fps.max(1))
            );
        }
    }

    /// Returns the current frame count.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The engine being driven.
    #[must_use]
    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    /// The frame clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

fn duration_us(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of total frame times.
    pub total_us_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded the 60 FPS budget.
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records a frame's statistics.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.total_us_sum = self.total_us_sum.saturating_add(stats.total_us);
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);

        if stats.total_us > duration_us(TARGET_FRAME_TIME) {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Returns the percentage of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Logs a summary of the statistics.
    pub fn log_summary(&self) {
        tracing::info!(
            "Frames: {} | avg {:.3} ms | min {:.3} ms | max {:.3} ms | over budget {:.1}%",
            self.frames_recorded,
            self.avg_frame_ms(),
            if self.frames_recorded == 0 { 0.0 } else { self.min_frame_us as f64 / 1000.0 },
            self.max_frame_us as f64 / 1000.0,
            self.over_budget_ratio() * 100.0
        );
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
