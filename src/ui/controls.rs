use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = state.engine.phase();
    let start_stop = if state.engine.is_running() {
        "  Pause  "
    } else {
        "  Start  "
    };

    let line = Line::from(vec![
        Span::styled(start_stop, Theme::button(phase)),
        Span::styled(" space ", Theme::key_hint()),
        Span::raw("    "),
        Span::styled("  Reset  ", Theme::title().add_modifier(Modifier::REVERSED)),
        Span::styled(" r ", Theme::key_hint()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
