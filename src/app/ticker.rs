use crate::app::event::AppEvent;
use crate::timer::{TickSource, TickStamp};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Tick source backed by a spawned `tokio::time::interval` task.
///
/// Ticks are delivered into the main event channel as [`AppEvent::Tick`].
/// At most one task runs at a time.
pub struct IntervalTicker {
    tx: mpsc::UnboundedSender<AppEvent>,
    period: Duration,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalTicker {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, period: Duration) -> Self {
        Self {
            tx,
            period,
            task: None,
            generation: 0,
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        self.abort_task();
        self.generation = self.generation.wrapping_add(1);

        let stamp = TickStamp(self.generation);
        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            // First tick lands one full period after start, not immediately
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick(stamp)).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop(&mut self) {
        self.abort_task();
        self.generation = self.generation.wrapping_add(1);
    }

    fn accepts(&self, stamp: TickStamp) -> bool {
        self.task.is_some() && stamp.0 == self.generation
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.abort_task();
    }
}
