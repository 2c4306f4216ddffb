use crate::timer::Phase;

/// Side effects the main loop performs after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayChime { finished: Phase, next: Phase },
    StopChime,
    Quit,
}
