use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HELP: &str = "space start/pause  r reset  tab focus  ↑↓ adjust  ? help  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let accent = Theme::accent(state.engine.phase());
    let mut parts: Vec<Span> = Vec::new();

    // Remaining time
    parts.push(Span::styled(
        format!(" {} ", state.engine.clock()),
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let help = if state.show_help { KEY_HELP } else { "? help" };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + help.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", help),
        Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
