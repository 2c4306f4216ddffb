mod clock;
mod controls;
mod layout;
mod lengths;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::AppState;
use crate::timer::Phase;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let clock_height = if state.config.ui.big_clock {
        clock::GLYPH_HEIGHT
    } else {
        1
    };
    let app_layout = layout::compute_layout(area, clock_height);

    title_bar::render(frame, app_layout.title_bar, state);
    render_phase_label(frame, app_layout.phase_label, state);
    clock::render(frame, app_layout.clock, state);
    render_progress(frame, app_layout.progress, state);
    controls::render(frame, app_layout.controls, state);
    lengths::render(frame, app_layout.break_length, state, Phase::Break);
    lengths::render(frame, app_layout.session_length, state, Phase::Session);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_phase_label(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = state.engine.phase();
    let label = Paragraph::new(Span::styled(phase.label(), theme::Theme::title()))
        .alignment(Alignment::Center);
    frame.render_widget(label, area);
}

fn render_progress(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = state.engine.phase();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::Theme::accent(phase)).bg(theme::Theme::BG_ELEVATED))
        .ratio(state.engine.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}
