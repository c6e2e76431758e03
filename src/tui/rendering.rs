use ratatui::Frame;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::SearchResult;
use crate::utils::sanitize_cell;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(216, 27, 96);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);
const SUCCESS: Color = Color::Rgb(16, 185, 129);
const WARNING: Color = Color::Rgb(245, 158, 11);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Everything besides the results that the frame needs
pub struct RenderState<'a> {
    pub input: &'a str,
    pub submitted_keyword: Option<&'a str>,
    pub catalog_len: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    results: &[SearchResult],
    selected_idx: usize,
    state: &RenderState,
) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.input);
    render_results_table(frame, layout.results_area, results, selected_idx);
    render_preview(frame, layout.preview_area, results.get(selected_idx));
    render_status_bar(frame, layout.status_area, results.len(), selected_idx, state);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let content = if input.is_empty() {
        Line::from(Span::styled("Type your keyword here...", Style::default().fg(MUTED)))
    } else {
        Line::from(input)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Keyword (e.g. 'cloud', 'AI', 'FinOps') "),
    );
    frame.render_widget(paragraph, area);

    // Cursor after the typed text, inside the border; wide glyphs take two cells
    let typed_width = u16::try_from(Line::from(input).width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1).saturating_add(typed_width).min(max_x);
    frame.set_cursor_position(Position::new(x, area.y + 1));
}

fn render_results_table(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    selected_idx: usize,
) {
    let header = Row::new(vec!["Title", "Content Type", "Publication Date"])
        .style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = results
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(sanitize_cell(&r.title)),
                Cell::from(sanitize_cell(&r.content_type)),
                Cell::from(r.date.clone()),
            ])
            .style(Style::default().fg(MUTED))
        })
        .collect();

    let widths = [Constraint::Min(20), Constraint::Length(14), Constraint::Length(16)];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default().fg(BRIGHT).bg(SUCCESS).add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Results "),
        );

    let selected = if results.is_empty() { None } else { Some(selected_idx) };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_preview(frame: &mut Frame, area: Rect, result: Option<&SearchResult>) {
    let content = if let Some(result) = result {
        let label = Style::default().fg(MUTED);
        let date = if result.date.is_empty() { "unknown".to_string() } else { result.date.clone() };

        Text::from(vec![
            Line::from(vec![
                Span::styled("Title: ", label),
                Span::raw(sanitize_cell(&result.title)),
            ]),
            Line::from(vec![
                Span::styled("Content Type: ", label),
                Span::raw(sanitize_cell(&result.content_type)),
            ]),
            Line::from(vec![Span::styled("Publication Date: ", label), Span::raw(date)]),
            Line::from(""),
            Line::from(sanitize_cell(&result.snippet)),
        ])
    } else {
        Text::from("No result selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Content Snippet "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    result_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let (status_text, fg) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Warning => WARNING,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), fg)
    } else {
        let mut parts = vec![format!("{} entries", state.catalog_len)];

        if let Some(keyword) = state.submitted_keyword {
            parts.push(format!("'{}': {} matches", sanitize_cell(keyword), result_count));
        }
        if result_count > 0 {
            parts.push(format!("result {}/{}", selected_idx + 1, result_count));
        }

        parts.push("Enter: search".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+R: reload".to_string());
        parts.push("Esc: clear".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), BRIGHT)
    };

    let paragraph = Paragraph::new(status_text).style(Style::default().fg(fg).bg(STATUS_BG));
    frame.render_widget(paragraph, area);
}
