use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Phase of one gradual redraw: the old scene fades out, then the new scene
/// fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawPhase {
    Idle,
    Clearing,
    Drawing,
}

/// Tuning for deterministic redraw stepping, in seconds per phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub clear_seconds: f64,
    pub draw_seconds: f64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            clear_seconds: 0.8,
            draw_seconds: 0.8,
        }
    }
}

impl TransitionTiming {
    pub fn validate(self) -> ChartResult<()> {
        for (value, name) in [
            (self.clear_seconds, "clear_seconds"),
            (self.draw_seconds, "draw_seconds"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "transition timing `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Deterministic redraw state machine: `Idle -> Clearing -> Drawing -> Idle`.
///
/// A `begin` while a redraw is mid-flight restarts from `Clearing`; there is
/// no cancellation handshake, the last writer wins. Easing is linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedrawTransition {
    timing: TransitionTiming,
    phase: RedrawPhase,
    elapsed_seconds: f64,
}

impl RedrawTransition {
    #[must_use]
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            phase: RedrawPhase::Idle,
            elapsed_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn phase(self) -> RedrawPhase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        self.phase != RedrawPhase::Idle
    }

    /// Starts a redraw from `Clearing`, restarting any redraw in flight.
    pub fn begin(&mut self) {
        self.phase = RedrawPhase::Clearing;
        self.elapsed_seconds = 0.0;
        self.collapse_zero_durations();
    }

    /// Advances the machine, carrying leftover time across phase boundaries.
    ///
    /// Negative or NaN deltas advance nothing.
    pub fn advance(&mut self, delta_seconds: f64) -> RedrawPhase {
        let mut remaining = delta_seconds.max(0.0);
        while remaining > 0.0 {
            let duration = match self.phase {
                RedrawPhase::Idle => break,
                RedrawPhase::Clearing => self.timing.clear_seconds,
                RedrawPhase::Drawing => self.timing.draw_seconds,
            };
            let left_in_phase = duration - self.elapsed_seconds;
            if remaining < left_in_phase {
                self.elapsed_seconds += remaining;
                break;
            }
            remaining -= left_in_phase;
            self.enter_next_phase();
        }
        self.collapse_zero_durations();
        self.phase
    }

    /// Linear progress through the current phase in `[0, 1]`; `Idle` is 1.
    #[must_use]
    pub fn progress(self) -> f64 {
        let duration = match self.phase {
            RedrawPhase::Idle => return 1.0,
            RedrawPhase::Clearing => self.timing.clear_seconds,
            RedrawPhase::Drawing => self.timing.draw_seconds,
        };
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed_seconds / duration).clamp(0.0, 1.0)
    }

    /// Scene opacity for the current phase: the old scene fades toward 0
    /// while `Clearing`, the new scene fades toward 1 while `Drawing`.
    #[must_use]
    pub fn opacity(self) -> f64 {
        match self.phase {
            RedrawPhase::Idle => 1.0,
            RedrawPhase::Clearing => 1.0 - self.progress(),
            RedrawPhase::Drawing => self.progress(),
        }
    }

    fn enter_next_phase(&mut self) {
        self.elapsed_seconds = 0.0;
        self.phase = match self.phase {
            RedrawPhase::Idle => RedrawPhase::Idle,
            RedrawPhase::Clearing => RedrawPhase::Drawing,
            RedrawPhase::Drawing => RedrawPhase::Idle,
        };
    }

    fn collapse_zero_durations(&mut self) {
        if self.phase == RedrawPhase::Clearing && self.timing.clear_seconds <= 0.0 {
            self.phase = RedrawPhase::Drawing;
            self.elapsed_seconds = 0.0;
        }
        if self.phase == RedrawPhase::Drawing && self.timing.draw_seconds <= 0.0 {
            self.phase = RedrawPhase::Idle;
            self.elapsed_seconds = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RedrawPhase, RedrawTransition, TransitionTiming};
    use approx::assert_relative_eq;

    fn transition() -> RedrawTransition {
        RedrawTransition::new(TransitionTiming {
            clear_seconds: 0.8,
            draw_seconds: 0.8,
        })
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut redraw = transition();
        redraw.begin();
        assert_eq!(redraw.phase(), RedrawPhase::Clearing);
        assert_eq!(redraw.advance(0.8), RedrawPhase::Drawing);
        assert_eq!(redraw.advance(0.8), RedrawPhase::Idle);
    }

    #[test]
    fn leftover_time_carries_into_the_next_phase() {
        let mut redraw = transition();
        redraw.begin();
        assert_eq!(redraw.advance(1.0), RedrawPhase::Drawing);
        assert_relative_eq!(redraw.progress(), 0.25);
    }

    #[test]
    fn opacity_fades_out_then_in() {
        let mut redraw = transition();
        redraw.begin();
        assert_relative_eq!(redraw.opacity(), 1.0);
        redraw.advance(0.4);
        assert_relative_eq!(redraw.opacity(), 0.5);
        redraw.advance(0.4);
        assert_relative_eq!(redraw.opacity(), 0.0);
        redraw.advance(0.4);
        assert_relative_eq!(redraw.opacity(), 0.5);
    }

    #[test]
    fn begin_mid_flight_restarts_from_clearing() {
        let mut redraw = transition();
        redraw.begin();
        redraw.advance(1.2);
        assert_eq!(redraw.phase(), RedrawPhase::Drawing);
        redraw.begin();
        assert_eq!(redraw.phase(), RedrawPhase::Clearing);
        assert_relative_eq!(redraw.progress(), 0.0);
    }

    #[test]
    fn zero_durations_collapse_immediately() {
        let mut redraw = RedrawTransition::new(TransitionTiming {
            clear_seconds: 0.0,
            draw_seconds: 0.0,
        });
        redraw.begin();
        assert_eq!(redraw.phase(), RedrawPhase::Idle);
        assert_relative_eq!(redraw.opacity(), 1.0);
    }

    #[test]
    fn zero_clear_duration_starts_in_drawing() {
        let mut redraw = RedrawTransition::new(TransitionTiming {
            clear_seconds: 0.0,
            draw_seconds: 0.5,
        });
        redraw.begin();
        assert_eq!(redraw.phase(), RedrawPhase::Drawing);
        assert_eq!(redraw.advance(0.5), RedrawPhase::Idle);
    }

    #[test]
    fn negative_and_nan_deltas_advance_nothing() {
        let mut redraw = transition();
        redraw.begin();
        redraw.advance(-1.0);
        assert_relative_eq!(redraw.progress(), 0.0);
        redraw.advance(f64::NAN);
        assert_relative_eq!(redraw.progress(), 0.0);
        assert_eq!(redraw.phase(), RedrawPhase::Clearing);
    }

    #[test]
    fn timing_rejects_negative_durations() {
        let timing = TransitionTiming {
            clear_seconds: -0.1,
            draw_seconds: 0.8,
        };
        assert!(timing.validate().is_err());
    }
}
