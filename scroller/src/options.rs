use alloc::sync::Arc;

use crate::{Ancestor, Error, OffsetResolution, Position, Result};

/// Maps the elapsed-time fraction (`0.0..=1.0`) to a progress fraction (conventionally
/// `0.0..=1.0`).
///
/// It is sampled once per tick, so it must be pure: no side effects and no dependency on
/// previous calls.
pub type TimingFunction = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

pub const DEFAULT_DURATION_MS: f64 = 1000.0;
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Configuration for [`crate::Scroller`].
///
/// Values are checked by [`ScrollerOptions::validate`], which `Scroller::new` calls.
pub struct ScrollerOptions<N> {
    /// The scroll container. Defaults to the whole viewport.
    pub ancestor: Ancestor<N>,
    /// The element to bring into view. While `None`, `call()` does nothing.
    pub target: Option<N>,
    /// Total animation time in milliseconds.
    pub duration_ms: f64,
    pub position: Position,
    pub timing: TimingFunction,
    /// Tick rate. The tick period is `1000 / frame_rate` milliseconds.
    pub frame_rate: u32,
    pub offset_resolution: OffsetResolution,
}

impl<N: Clone> Clone for ScrollerOptions<N> {
    fn clone(&self) -> Self {
        Self {
            ancestor: self.ancestor.clone(),
            target: self.target.clone(),
            duration_ms: self.duration_ms,
            position: self.position,
            timing: Arc::clone(&self.timing),
            frame_rate: self.frame_rate,
            offset_resolution: self.offset_resolution,
        }
    }
}

impl<N> Default for ScrollerOptions<N> {
    fn default() -> Self {
        Self {
            ancestor: Ancestor::Viewport,
            target: None,
            duration_ms: DEFAULT_DURATION_MS,
            position: Position::default(),
            timing: Arc::new(|t: f64| t),
            frame_rate: DEFAULT_FRAME_RATE,
            offset_resolution: OffsetResolution::default(),
        }
    }
}

impl<N> ScrollerOptions<N> {
    pub fn new(ancestor: Ancestor<N>) -> Self {
        Self {
            ancestor,
            ..Self::default()
        }
    }

    pub fn with_ancestor(mut self, ancestor: Ancestor<N>) -> Self {
        self.ancestor = ancestor;
        self
    }

    pub fn with_target(mut self, target: Option<N>) -> Self {
        self.target = target;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Parses the position by name (`start`, `top`, `center`, `end`).
    pub fn with_position_name(mut self, name: &str) -> Result<Self> {
        self.position = name.parse()?;
        Ok(self)
    }

    pub fn with_timing(mut self, timing: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.timing = Arc::new(timing);
        self
    }

    pub fn with_timing_function(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_offset_resolution(mut self, offset_resolution: OffsetResolution) -> Self {
        self.offset_resolution = offset_resolution;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(Error::InvalidDuration(self.duration_ms));
        }
        if self.frame_rate == 0 {
            return Err(Error::InvalidFrameRate);
        }
        Ok(())
    }

    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.frame_rate as f64
    }
}

impl<N: core::fmt::Debug> core::fmt::Debug for ScrollerOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("ancestor", &self.ancestor)
            .field("target", &self.target)
            .field("duration_ms", &self.duration_ms)
            .field("position", &self.position)
            .field("frame_rate", &self.frame_rate)
            .field("offset_resolution", &self.offset_resolution)
            .finish_non_exhaustive()
    }
}
