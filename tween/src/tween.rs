use log::{trace, warn};

use crate::easing::Easing;
use crate::error::TweenError;

/// A value that moves from 0 to `scale` over `end_time` along an easing curve
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    easing: Easing,
    end_time: f64,
    current_time: f64,
    scale: f64,
    progress: f64,
}

impl Tween {
    /// Creates a tween at time 0.
    ///
    /// # Errors
    ///
    /// Returns `TweenError::InvalidDuration` if `end_time` is not finite and
    /// strictly positive.
    pub fn new(easing: Easing, end_time: f64, scale: f64) -> Result<Self, TweenError> {
        check_duration(end_time)?;
        Ok(Self {
            easing,
            end_time,
            current_time: 0.0,
            scale,
            progress: 0.0,
        })
    }

    /// A linear tween from 0 to `scale` over one time unit.
    #[must_use]
    pub fn linear(scale: f64) -> Self {
        Self {
            easing: Easing::Linear,
            end_time: 1.0,
            current_time: 0.0,
            scale,
            progress: 0.0,
        }
    }

    /// Moves the clock forward by `delta_time`; negative values rewind it.
    ///
    /// A clock that becomes NaN restarts at time 0.
    pub fn advance(&mut self, delta_time: f64) {
        self.current_time += delta_time;
        self.update();
    }

    /// Moves the clock to `time`. NaN restarts it at time 0.
    pub fn set_time(&mut self, time: f64) {
        self.current_time = time;
        self.update();
    }

    /// Replaces curve, duration and scale, and rewinds to time 0.
    ///
    /// # Errors
    ///
    /// Returns `TweenError::InvalidDuration` if `end_time` is not finite and
    /// strictly positive. The tween is left unchanged in that case.
    pub fn reset(&mut self, easing: Easing, end_time: f64, scale: f64) -> Result<(), TweenError> {
        *self = Self::new(easing, end_time, scale)?;
        Ok(())
    }

    /// Scaled output: eased progress times `scale`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.progress * self.scale
    }

    /// Eased progress, before scaling. 0 before the start, 1 after the end.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_time >= self.end_time
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    fn update(&mut self) {
        if self.current_time.is_nan() {
            warn!("tween: clock became NaN, restarting at 0");
            self.current_time = 0.0;
        }
        self.progress = if self.current_time > self.end_time {
            1.0
        } else if self.current_time < 0.0 {
            0.0
        } else {
            self.easing.apply(self.current_time / self.end_time)
        };
        trace!(
            "tween: t={} of {} -> {}",
            self.current_time,
            self.end_time,
            self.progress
        );
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::linear(1.0)
    }
}

impl From<&Tween> for f64 {
    fn from(tween: &Tween) -> Self {
        tween.value()
    }
}

fn check_duration(end_time: f64) -> Result<(), TweenError> {
    if end_time.is_finite() && end_time > 0.0 {
        Ok(())
    } else {
        Err(TweenError::InvalidDuration { end_time })
    }
}
