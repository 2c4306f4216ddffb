use crate::config::AppConfig;
use crate::timer::{Phase, TickSource, TimerEngine};

/// Which length adjuster the arrow keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    SessionLength,
    BreakLength,
}

impl FocusPanel {
    pub fn phase(self) -> Phase {
        match self {
            FocusPanel::SessionLength => Phase::Session,
            FocusPanel::BreakLength => Phase::Break,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub engine: TimerEngine,
    pub focus: FocusPanel,
    pub show_help: bool,
    /// Sessions that ran to zero since the last reset.
    pub sessions_completed: u32,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, ticks: Box<dyn TickSource>) -> Self {
        let show_help = config.ui.show_help;
        Self {
            config,
            engine: TimerEngine::new(ticks),
            focus: FocusPanel::SessionLength,
            show_help,
            sessions_completed: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::SessionLength => FocusPanel::BreakLength,
            FocusPanel::BreakLength => FocusPanel::SessionLength,
        };
        self.dirty = true;
    }

    /// Adjust whichever length the focus is on.
    pub fn adjust_focused(&mut self, delta: i32) {
        match self.focus {
            FocusPanel::SessionLength => self.engine.adjust_session_length(delta),
            FocusPanel::BreakLength => self.engine.adjust_break_length(delta),
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let run_state = if self.engine.is_running() {
            "RUNNING"
        } else {
            "PAUSED"
        };
        let mut s = format!("{} | {}", run_state, self.engine.phase());
        if self.sessions_completed > 0 {
            s.push_str(&format!(" | Sessions: {}", self.sessions_completed));
        }
        s
    }
}
