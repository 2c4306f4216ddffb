use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg_style = Style::default().bg(Theme::BG_ELEVATED);
    let accent = Theme::accent(state.engine.phase());

    let line = Line::from(vec![
        Span::styled(
            " ● ",
            Style::default()
                .fg(accent)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Pomodoro Clock",
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default()
                .fg(Theme::BORDER_DIM)
                .bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            format!(
                "{} min session / {} min break",
                state.engine.session_minutes(),
                state.engine.break_minutes()
            ),
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(bg_style);
    frame.render_widget(paragraph, area);
}
