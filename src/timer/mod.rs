//! Session/break countdown state machine.
//!
//! [`TimerEngine`] owns the [`TimerState`] and is the only thing allowed to
//! change it. Ticks arrive from a [`TickSource`] that the engine starts and
//! stops together with its `running` flag.

pub mod engine;
pub mod phase;
pub mod ticker;

pub use engine::{Notice, TimerEngine};
pub use phase::Phase;
pub use ticker::{TickSource, TickStamp};
