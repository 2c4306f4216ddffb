use crate::timer::TickStamp;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second elapsed on the countdown tick source
    Tick(TickStamp),
}
