use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, CheckFailure, CheckState};
use crate::roles::RoleEntry;

// Slate Harbor palette
const BG_DARK: Color = Color::Rgb(14, 16, 20);           // Deep background
const BG_PANEL: Color = Color::Rgb(21, 24, 30);          // Panel background

const TEAL: Color = Color::Rgb(94, 201, 190);            // Primary accent
const TEAL_DIM: Color = Color::Rgb(62, 128, 122);        // Darker accent
const AMBER: Color = Color::Rgb(224, 164, 88);           // Denied panel
const AMBER_DIM: Color = Color::Rgb(140, 104, 58);       // Denied border
const CRIMSON: Color = Color::Rgb(214, 98, 92);          // Errors
const MOSS: Color = Color::Rgb(139, 186, 118);           // Role card accent

const TEXT_PRIMARY: Color = Color::Rgb(236, 238, 242);   // Near white
const TEXT_SECONDARY: Color = Color::Rgb(168, 174, 186); // Light gray
const TEXT_MUTED: Color = Color::Rgb(104, 112, 128);     // Medium gray

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &App) {
    let bg = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg, frame.area());

    let area = frame.area();
    let card_width = app.config.card_width.min(area.width.saturating_sub(2));
    let card_height = 17.min(area.height);
    let card = Rect {
        x: area.x + (area.width.saturating_sub(card_width)) / 2,
        y: area.y + (area.height.saturating_sub(card_height)) / 2,
        width: card_width,
        height: card_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + subtitle
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Gap
            Constraint::Min(7),    // Result panel
            Constraint::Length(1), // Footer
        ])
        .split(card);

    draw_header(frame, chunks[0]);
    draw_input(frame, app, chunks[1]);
    draw_hints(frame, app, chunks[2]);
    draw_result(frame, app, chunks[4]);
    draw_footer(frame, app, chunks[5]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Roleboard",
            Style::default().fg(TEAL).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter a number from 1 to 6 to look up that seat's team role.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    // Pulse the border while a check is in flight, accent otherwise.
    let border_color = if app.is_checking() {
        let glow = (app.animation_frame as f64 / 30.0).sin() * 0.3 + 0.7;
        Color::Rgb(
            (94.0 * glow) as u8,
            (201.0 * glow) as u8,
            (190.0 * glow) as u8,
        )
    } else {
        TEAL_DIM
    };

    let block = Block::default()
        .title(Span::styled(" Number ", Style::default().fg(TEXT_MUTED)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if app.animation_frame % 30 < 15 { "|" } else { " " };
    let input_text = format!(" > {}{}", app.input, cursor);
    let input = Paragraph::new(input_text).style(Style::default().fg(TEXT_PRIMARY));
    frame.render_widget(input, inner);
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let show_label = if app.is_checking() {
        Span::styled("[Enter] checking...", Style::default().fg(TEXT_MUTED))
    } else {
        Span::styled("[Enter] show", Style::default().fg(TEXT_SECONDARY))
    };
    let hints = Line::from(vec![
        show_label,
        Span::styled("   [Esc] clear", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("   [Ctrl+C] quit", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    match &app.state {
        CheckState::Idle => {}
        CheckState::Checking => draw_checking(frame, app, area),
        CheckState::Allowed(entry) => draw_role_card(frame, entry, area),
        CheckState::Denied => draw_denied(frame, area),
        CheckState::Failed(failure) => draw_failure(frame, failure, area),
    }
}

fn draw_checking(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER_FRAMES[(app.animation_frame / 6) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(TEAL)),
        Span::styled("Checking with the API...", Style::default().fg(TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_role_card(frame: &mut Frame, entry: &RoleEntry, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Your role ",
            Style::default().fg(MOSS).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MOSS))
        .style(Style::default().bg(BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        centered_line(entry.icon, inner.width, Style::default().fg(TEXT_PRIMARY)),
        Line::from(""),
        centered_line(
            entry.title,
            inner.width,
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        centered_line(
            entry.description,
            inner.width,
            Style::default().fg(TEXT_SECONDARY),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_denied(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Not published yet ",
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(AMBER_DIM))
        .style(Style::default().bg(BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let retry_hint = Span::styled("[Enter] retry", Style::default().fg(AMBER));
    let lines = vec![
        Line::from(""),
        centered_line(
            "This number's role has not been announced.",
            inner.width,
            Style::default().fg(TEXT_SECONDARY),
        ),
        Line::from(""),
        Line::from(retry_hint).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_failure(frame: &mut Frame, failure: &CheckFailure, area: Rect) {
    let message = Paragraph::new(failure.to_string())
        .style(Style::default().fg(CRIMSON).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(checked_at) = app.last_checked {
        let footer = Paragraph::new(format!(
            "last checked {} UTC",
            checked_at.format("%H:%M:%S")
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(footer, area);
    }
}

/// Center a single line by display width; emoji are double-width, so
/// byte or char counts would drift the padding.
fn centered_line(text: &str, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.width()) / 2;
    Line::from(Span::styled(format!("{}{}", " ".repeat(pad), text), style))
}
