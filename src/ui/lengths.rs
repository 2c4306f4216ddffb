use crate::app::state::*;
use crate::timer::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, phase: Phase) {
    let (title, minutes) = match phase {
        Phase::Session => (" Session Length ", state.engine.session_minutes()),
        Phase::Break => (" Break Length ", state.engine.break_minutes()),
    };
    let focused = state.focus.phase() == phase;
    let locked = state.engine.is_running();

    let (border_style, border_type) = if focused && !locked {
        (Theme::border_focused(phase), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let value_style = if locked { Theme::locked() } else { Theme::value() };
    let arrow_style = if locked { Theme::locked() } else { Theme::key_hint() };

    let line = Line::from(vec![
        Span::styled("↓  ", arrow_style),
        Span::styled(format!("{:>2}", minutes), value_style),
        Span::styled("  ↑", arrow_style),
    ]);
    let hint = Line::from(Span::styled(key_hint(phase, locked), Theme::key_hint()));

    let paragraph = Paragraph::new(vec![line, hint])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn key_hint(phase: Phase, locked: bool) -> &'static str {
    if locked {
        return "locked while running";
    }
    match phase {
        Phase::Session => "s / S",
        Phase::Break => "b / B",
    }
}
