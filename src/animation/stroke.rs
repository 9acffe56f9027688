use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::{
        error::{HandscriptError, HandscriptResult},
        math::MARKUP_RESOLUTION,
    },
};

/// Lifecycle phase of a [`StrokeAnimation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted but not started; the stroke is fully hidden.
    Idle,
    /// A transition toward zero offset is in progress.
    Animating,
    /// Offset reached zero; the stroke is fully drawn.
    Complete,
}

/// Stroke-dash-offset animation from the dash-array length (hidden) to zero (drawn).
///
/// Timestamps are offsets on the host timeline. The controller never reads a clock itself, so
/// sampling is deterministic for a given `now`.
#[derive(Clone, Debug)]
pub struct StrokeAnimation {
    dash_array: f64,
    ease: Ease,
    phase: Phase,
    transition: Option<Transition>,
}

/// Started transition: offset `from` toward zero over `duration`, `elapsed` into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpan {
    /// Offset at the start of the transition.
    pub from: f64,
    /// Full transition duration.
    pub duration: Duration,
    /// Time already spent, capped at `duration`.
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: f64,
    started_at: Duration,
    duration: Duration,
}

impl StrokeAnimation {
    /// Create an idle animation whose offset equals `dash_array`.
    pub fn new(dash_array: f64, ease: Ease) -> HandscriptResult<Self> {
        validate_dash_array(dash_array)?;
        Ok(Self {
            dash_array,
            ease,
            phase: Phase::Idle,
            transition: None,
        })
    }

    /// Dash-array length applied to the stroke.
    pub fn dash_array(&self) -> f64 {
        self.dash_array
    }

    /// Easing policy of the transition.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Phase as of the last [`start`](Self::start) or [`tick`](Self::tick).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Duration of the current transition, if one was started.
    pub fn duration(&self) -> Option<Duration> {
        self.transition.map(|t| t.duration)
    }

    /// Start (or restart) the transition toward zero offset.
    ///
    /// A restart begins from the offset sampled at `now`, so changing the duration mid-flight
    /// re-times the remaining distance instead of jumping back to hidden.
    pub fn start(&mut self, duration: Duration, now: Duration) {
        let from = self.offset_at(now);
        if duration.is_zero() || from <= 0.0 {
            self.transition = Some(Transition {
                from: 0.0,
                started_at: now,
                duration,
            });
            self.phase = Phase::Complete;
            return;
        }
        self.transition = Some(Transition {
            from,
            started_at: now,
            duration,
        });
        self.phase = Phase::Animating;
    }

    /// Normalized linear progress of the current transition at `now`.
    pub fn progress_at(&self, now: Duration) -> f64 {
        let Some(t) = self.transition else {
            return 0.0;
        };
        if t.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(t.started_at);
        (elapsed.as_secs_f64() / t.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Stroke dash offset at `now`.
    pub fn offset_at(&self, now: Duration) -> f64 {
        match self.transition {
            None => self.dash_array,
            Some(t) => {
                let eased = self.ease.apply(self.progress_at(now));
                (t.from * (1.0 - eased)).max(0.0)
            }
        }
    }

    /// Current transition as seen at `now`, for timelines that replay it themselves (CSS).
    pub fn span_at(&self, now: Duration) -> Option<TransitionSpan> {
        self.transition.map(|t| TransitionSpan {
            from: t.from,
            duration: t.duration,
            elapsed: now.saturating_sub(t.started_at).min(t.duration),
        })
    }

    /// Advance the phase to `now` and return the offset.
    pub fn tick(&mut self, now: Duration) -> f64 {
        if self.phase == Phase::Animating && self.progress_at(now) >= 1.0 {
            self.phase = Phase::Complete;
        }
        self.offset_at(now)
    }
}

pub(crate) fn validate_dash_array(dash_array: f64) -> HandscriptResult<()> {
    if !dash_array.is_finite() || dash_array < MARKUP_RESOLUTION {
        return Err(HandscriptError::validation(format!(
            "stroke_dash_array must be finite and >= {MARKUP_RESOLUTION}"
        )));
    }
    Ok(())
}

/// Convert a duration in seconds into a [`Duration`].
pub fn duration_from_secs(secs: f64) -> HandscriptResult<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(HandscriptError::validation(
            "duration must be finite and >= 0",
        ));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| HandscriptError::validation(format!("invalid duration: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stroke.rs"]
mod tests;
