use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub phase_label: Rect,
    pub clock: Rect,
    pub progress: Rect,
    pub controls: Rect,
    pub break_length: Rect,
    pub session_length: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, clock_height: u16) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Length adjusters keep their full height; the timer block takes what is left
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),   // Timer block
            Constraint::Length(4), // Length adjusters
        ])
        .split(content);

    let timer_area = content_chunks[0];
    let lengths_area = content_chunks[1];

    // Label, gauge and controls always get a row. The clock shrinks to one
    // row and the spacers collapse before anything else is squeezed.
    let fixed_rows = 3;
    let clock_height = if timer_area.height >= fixed_rows + clock_height {
        clock_height
    } else {
        1
    };
    let gap = u16::from(timer_area.height >= fixed_rows + clock_height + 2);

    let timer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),            // Phase label
            Constraint::Length(clock_height), // Clock
            Constraint::Length(gap),          // Spacer
            Constraint::Length(1),            // Progress gauge
            Constraint::Length(gap),          // Spacer
            Constraint::Length(1),            // Start/Reset controls
            Constraint::Fill(1),
        ])
        .split(timer_area);

    let phase_label = timer_chunks[1];
    let clock = timer_chunks[2];
    let progress = centered_width(timer_chunks[4], 40);
    let controls = timer_chunks[6];

    // Break Length | Session Length, side by side
    let length_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(lengths_area);

    AppLayout {
        title_bar,
        phase_label,
        clock,
        progress,
        controls,
        break_length: length_chunks[0],
        session_length: length_chunks[1],
        status_bar,
    }
}

/// Horizontally center a strip at most `width` columns wide.
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
