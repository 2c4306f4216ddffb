//! The periodic tick source driving a running countdown.

/// Identifies which run of a tick source produced a tick.
///
/// Every `start` or `stop` moves the source to a new generation, so a tick
/// that was already queued when the source stopped carries a stale stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickStamp(pub u64);

/// Handle to something that fires once per second while started.
///
/// `stop` must be synchronous: once it returns, `accepts` rejects every stamp
/// issued before the call.
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn accepts(&self, stamp: TickStamp) -> bool;
}

#[cfg(test)]
pub mod testing {
    use super::{TickSource, TickStamp};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    pub struct ManualTicksLog {
        pub active: bool,
        pub generation: u64,
        pub starts: usize,
        pub stops: usize,
    }

    /// Tick source driven by hand. Clones share one log so a test can keep
    /// a handle after boxing the source into an engine.
    #[derive(Debug, Clone, Default)]
    pub struct ManualTicks {
        log: Rc<RefCell<ManualTicksLog>>,
    }

    impl ManualTicks {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_active(&self) -> bool {
            self.log.borrow().active
        }

        pub fn starts(&self) -> usize {
            self.log.borrow().starts
        }

        pub fn stops(&self) -> usize {
            self.log.borrow().stops
        }

        /// Stamp a tick fired by the current run.
        pub fn stamp(&self) -> TickStamp {
            TickStamp(self.log.borrow().generation)
        }
    }

    impl TickSource for ManualTicks {
        fn start(&mut self) {
            let mut log = self.log.borrow_mut();
            log.active = true;
            log.generation += 1;
            log.starts += 1;
        }

        fn stop(&mut self) {
            let mut log = self.log.borrow_mut();
            log.active = false;
            log.generation += 1;
            log.stops += 1;
        }

        fn accepts(&self, stamp: TickStamp) -> bool {
            let log = self.log.borrow();
            log.active && log.generation == stamp.0
        }
    }
}
