//! Timer engine implementation.
//!
//! ## State Transitions
//!
//! ```text
//! Session --(remaining hits 0)--> Break --(remaining hits 0)--> Session ...
//! ```
//!
//! The countdown keeps running across a phase boundary. Lengths can only be
//! edited while the timer is stopped.

use tracing::{debug, info};

use super::phase::Phase;
use super::ticker::{TickSource, TickStamp};

pub const MIN_LENGTH_MINUTES: u32 = 1;
pub const MAX_LENGTH_MINUTES: u32 = 60;
pub const DEFAULT_SESSION_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Everything the timer knows. Only [`TimerEngine`] intents mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    phase: Phase,
    session_minutes: u32,
    break_minutes: u32,
    remaining_seconds: u32,
    running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            phase: Phase::Session,
            session_minutes: DEFAULT_SESSION_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            remaining_seconds: DEFAULT_SESSION_MINUTES * 60,
            running: false,
        }
    }
}

impl TimerState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Configured length of `phase`, in minutes.
    pub fn length_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Session => self.session_minutes,
            Phase::Break => self.break_minutes,
        }
    }
}

/// Fire-and-forget notifications for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A phase ran out; play the end-of-phase sound.
    PhaseComplete { finished: Phase, next: Phase },
    /// The timer was reset; stop and rewind the end-of-phase sound.
    Reset,
}

/// Core timer engine.
///
/// Owns the tick source handle so that starting and stopping it always
/// happens together with flipping `running`.
pub struct TimerEngine {
    state: TimerState,
    ticks: Box<dyn TickSource>,
}

impl TimerEngine {
    pub fn new(ticks: Box<dyn TickSource>) -> Self {
        Self {
            state: TimerState::default(),
            ticks,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn session_minutes(&self) -> u32 {
        self.state.session_minutes()
    }

    pub fn break_minutes(&self) -> u32 {
        self.state.break_minutes()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.state.remaining_seconds)
    }

    /// 0.0 .. 1.0 elapsed fraction of the current phase.
    pub fn progress(&self) -> f64 {
        let total = self.state.length_of(self.state.phase) * 60;
        if total == 0 {
            return 0.0;
        }
        let remaining = self.state.remaining_seconds.min(total);
        1.0 - (remaining as f64 / total as f64)
    }

    // ── Intents ──────────────────────────────────────────────────────

    pub fn adjust_session_length(&mut self, delta: i32) {
        if self.state.running {
            debug!(delta, "session length locked while running");
            return;
        }
        self.state.session_minutes = clamp_length(self.state.session_minutes, delta);
        if self.state.phase == Phase::Session {
            self.state.remaining_seconds = self.state.session_minutes * 60;
        }
        debug!(minutes = self.state.session_minutes, "session length adjusted");
    }

    pub fn adjust_break_length(&mut self, delta: i32) {
        if self.state.running {
            debug!(delta, "break length locked while running");
            return;
        }
        self.state.break_minutes = clamp_length(self.state.break_minutes, delta);
        if self.state.phase == Phase::Break {
            self.state.remaining_seconds = self.state.break_minutes * 60;
        }
        debug!(minutes = self.state.break_minutes, "break length adjusted");
    }

    pub fn toggle_running(&mut self) {
        if self.state.running {
            self.ticks.stop();
            self.state.running = false;
            info!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "timer paused");
        } else {
            self.ticks.start();
            self.state.running = true;
            info!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "timer started");
        }
    }

    /// Apply a tick delivered by the tick source.
    ///
    /// Ticks that arrive while stopped, or that were stamped by a run that
    /// has since been stopped, are dropped.
    pub fn on_tick(&mut self, stamp: TickStamp) -> Option<Notice> {
        if !self.state.running || !self.ticks.accepts(stamp) {
            debug!(?stamp, "dropping stale tick");
            return None;
        }
        self.tick()
    }

    /// Count down one second. Completion is checked after the decrement, so
    /// it fires exactly when the value reaches zero.
    pub fn tick(&mut self) -> Option<Notice> {
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            return None;
        }

        let finished = self.state.phase;
        let next = finished.other();
        self.state.phase = next;
        self.state.remaining_seconds = self.state.length_of(next) * 60;
        info!(%finished, %next, "phase complete");
        Some(Notice::PhaseComplete { finished, next })
    }

    pub fn reset(&mut self) -> Notice {
        self.ticks.stop();
        self.state = TimerState::default();
        info!("timer reset");
        Notice::Reset
    }
}

fn clamp_length(minutes: u32, delta: i32) -> u32 {
    let adjusted = i64::from(minutes) + i64::from(delta);
    adjusted.clamp(i64::from(MIN_LENGTH_MINUTES), i64::from(MAX_LENGTH_MINUTES)) as u32
}

/// Format seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
