use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::timer::{Notice, Phase, TickStamp};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick(stamp) => handle_tick(state, stamp),
    }
}

fn handle_tick(state: &mut AppState, stamp: TickStamp) -> Vec<Action> {
    let before = state.engine.remaining_seconds();
    let notice = state.engine.on_tick(stamp);
    if notice.is_some() || state.engine.remaining_seconds() != before {
        state.dirty = true;
    }
    notice_actions(state, notice)
}

fn notice_actions(state: &mut AppState, notice: Option<Notice>) -> Vec<Action> {
    match notice {
        Some(Notice::PhaseComplete { finished, next }) => {
            if finished == Phase::Session {
                state.sessions_completed += 1;
            }
            vec![Action::PlayChime { finished, next }]
        }
        Some(Notice::Reset) => {
            state.sessions_completed = 0;
            vec![Action::StopChime]
        }
        None => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Any key clears a transient status message
    state.status_message = None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(' ') | KeyCode::Enter => {
            state.engine.toggle_running();
            vec![]
        }
        KeyCode::Char('r') => {
            let notice = state.engine.reset();
            notice_actions(state, Some(notice))
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => {
            state.adjust_focused(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => {
            state.adjust_focused(-1);
            vec![]
        }
        KeyCode::Char('s') => {
            state.engine.adjust_session_length(-1);
            vec![]
        }
        KeyCode::Char('S') => {
            state.engine.adjust_session_length(1);
            vec![]
        }
        KeyCode::Char('b') => {
            state.engine.adjust_break_length(-1);
            vec![]
        }
        KeyCode::Char('B') => {
            state.engine.adjust_break_length(1);
            vec![]
        }
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
            vec![]
        }
        other => {
            debug!(?other, "unbound key");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::timer::engine::TimerState;
    use crate::timer::ticker::testing::ManualTicks;

    fn setup() -> (AppState, ManualTicks) {
        let ticks = ManualTicks::new();
        let state = AppState::new(AppConfig::default(), Box::new(ticks.clone()));
        (state, ticks)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn tick(state: &mut AppState, ticks: &ManualTicks) -> Vec<Action> {
        handle_event(state, AppEvent::Tick(ticks.stamp()))
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, _) = setup();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        assert_eq!(press(&mut state, KeyCode::Esc), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_space_toggles_running() {
        let (mut state, ticks) = setup();
        press(&mut state, KeyCode::Char(' '));
        assert!(state.engine.is_running());
        assert!(ticks.is_active());
        press(&mut state, KeyCode::Enter);
        assert!(!state.engine.is_running());
        assert!(!ticks.is_active());
    }

    #[test]
    fn test_arrow_keys_follow_focus() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.engine.session_minutes(), 26);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.engine.break_minutes(), 3);
    }

    #[test]
    fn test_direct_length_keys() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Char('S'));
        press(&mut state, KeyCode::Char('S'));
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('B'));
        assert_eq!(state.engine.session_minutes(), 26);
        assert_eq!(state.engine.break_minutes(), 6);
        assert_eq!(state.engine.remaining_seconds(), 26 * 60);
    }

    #[test]
    fn test_length_keys_ignored_while_running() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Char(' '));
        let before = *state.engine.state();
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Char('B'));
        assert_eq!(*state.engine.state(), before);
    }

    #[test]
    fn test_tick_marks_dirty_and_counts_down() {
        let (mut state, ticks) = setup();
        press(&mut state, KeyCode::Char(' '));
        state.dirty = false;
        assert!(tick(&mut state, &ticks).is_empty());
        assert!(state.dirty);
        assert_eq!(state.engine.remaining_seconds(), 1499);
    }

    #[test]
    fn test_stale_tick_leaves_state_clean() {
        let (mut state, ticks) = setup();
        press(&mut state, KeyCode::Char(' '));
        let stale = ticks.stamp();
        press(&mut state, KeyCode::Char(' '));
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick(stale));
        assert!(!state.dirty);
        assert_eq!(state.engine.remaining_seconds(), 1500);
    }

    #[test]
    fn test_phase_completion_plays_chime() {
        let (mut state, ticks) = setup();
        for _ in 0..24 {
            press(&mut state, KeyCode::Char('s'));
        }
        press(&mut state, KeyCode::Char(' '));

        let actions: Vec<Action> = (0..60).flat_map(|_| tick(&mut state, &ticks)).collect();

        assert_eq!(
            actions,
            vec![Action::PlayChime {
                finished: Phase::Session,
                next: Phase::Break
            }]
        );
        assert_eq!(state.sessions_completed, 1);
        assert_eq!(state.engine.phase(), Phase::Break);
    }

    #[test]
    fn test_reset_stops_chime_and_restores_defaults() {
        let (mut state, ticks) = setup();
        press(&mut state, KeyCode::Char('B'));
        press(&mut state, KeyCode::Char(' '));
        tick(&mut state, &ticks);
        state.sessions_completed = 3;

        assert_eq!(press(&mut state, KeyCode::Char('r')), vec![Action::StopChime]);
        assert_eq!(*state.engine.state(), TimerState::default());
        assert_eq!(state.sessions_completed, 0);
        assert!(!ticks.is_active());
    }

    #[test]
    fn test_help_toggle() {
        let (mut state, _) = setup();
        let initial = state.show_help;
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.show_help, !initial);
    }
}
