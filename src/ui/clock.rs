use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const GLYPH_HEIGHT: u16 = 5;

// 3x5 glyphs; every cell is doubled horizontally when drawn.
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];
const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

fn glyph(c: char) -> Option<&'static [&'static str; 5]> {
    match c {
        ':' => Some(&COLON),
        _ => c.to_digit(10).map(|d| &DIGITS[d as usize]),
    }
}

/// Rows of `text` drawn in block glyphs, one space between glyphs.
pub fn big_text_rows(text: &str) -> [String; 5] {
    let mut rows: [String; 5] = Default::default();
    for c in text.chars() {
        let Some(g) = glyph(c) else { continue };
        for (row, cells) in rows.iter_mut().zip(g.iter()) {
            if !row.is_empty() {
                row.push(' ');
            }
            for cell in cells.chars() {
                row.push(cell);
                row.push(cell);
            }
        }
    }
    rows
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = state.engine.phase();
    let clock = state.engine.clock();
    let rows = big_text_rows(&clock);
    let big_width = rows[0].chars().count() as u16;

    let text = if state.config.ui.big_clock && area.height >= GLYPH_HEIGHT && area.width >= big_width {
        Text::from(rows.into_iter().map(Line::from).collect::<Vec<_>>())
    } else {
        Text::from(Line::from(clock))
    };

    let paragraph = Paragraph::new(text)
        .style(Theme::clock(phase))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::timer::ticker::testing::ManualTicks;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn clock_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_big_text_rows_width() {
        let rows = big_text_rows("25:00");
        // Four digits of 6 cells, a 2-cell colon, four gaps
        for row in &rows {
            assert_eq!(row.chars().count(), 4 * 6 + 2 + 4);
        }
    }

    #[test]
    fn test_big_text_rows_shape() {
        let rows = big_text_rows("1");
        assert_eq!(rows[0], "    ██");
        let rows = big_text_rows("0");
        assert_eq!(rows[2], "██  ██");
    }

    #[test]
    fn test_big_text_skips_unknown_chars() {
        let rows = big_text_rows("x");
        assert!(rows.iter().all(String::is_empty));
    }

    #[test]
    fn test_big_clock_draws_glyphs_when_it_fits() {
        let state = AppState::new(AppConfig::default(), Box::new(ManualTicks::new()));
        assert!(state.config.ui.big_clock);
        let text = clock_text(&state, 40, GLYPH_HEIGHT);
        assert!(text.contains('█'));
        assert!(!text.contains("25:00"));
    }

    #[test]
    fn test_big_clock_narrow_area_renders_plain() {
        let state = AppState::new(AppConfig::default(), Box::new(ManualTicks::new()));
        assert!(state.config.ui.big_clock);
        // "25:00" in block glyphs needs 30 columns
        let text = clock_text(&state, 20, GLYPH_HEIGHT);
        assert!(text.contains("25:00"));
        assert!(!text.contains('█'));
    }
}
