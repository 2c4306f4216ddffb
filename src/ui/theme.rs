use crate::timer::Phase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const SESSION_ACCENT: Color = Color::Rgb(0xd9, 0x00, 0x15);
    pub const BREAK_ACCENT: Color = Color::Rgb(0x00, 0xd9, 0x15);
    pub const TEXT_PRIMARY: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
    pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
    pub const BORDER_DIM: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
    pub const BG_ELEVATED: Color = Color::Rgb(0x24, 0x24, 0x24);

    pub fn accent(phase: Phase) -> Color {
        match phase {
            Phase::Session => Self::SESSION_ACCENT,
            Phase::Break => Self::BREAK_ACCENT,
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused(phase: Phase) -> Style {
        Style::default().fg(Self::accent(phase))
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn clock(phase: Phase) -> Style {
        Style::default()
            .fg(Self::accent(phase))
            .add_modifier(Modifier::BOLD)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn locked() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn button(phase: Phase) -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::accent(phase))
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
