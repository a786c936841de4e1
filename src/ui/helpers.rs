use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Member;

/// One attendance row: checkbox, `Last, First`, and a "Present" tag.
pub(crate) fn member_line(member: &Member, present: bool, selected: bool) -> Line<'static> {
    let checkbox = if present { "[x] " } else { "[ ] " };
    let name_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::raw("    "),
        Span::styled(checkbox, Style::default().fg(Color::Cyan)),
        Span::styled(member.display_name(), name_style),
    ];
    if present {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Present", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

/// Bucket header with its `present / total` badge.
pub(crate) fn bucket_header_line(name: &str, present: usize, total: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{present} / {total}"),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// `1 member` / `3 members`.
pub(crate) fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

/// Column of a text cursor sitting `prefix + value_len` cells into `area`,
/// pinned to the last column when the text runs past the edge.
pub(crate) fn cursor_column(area: Rect, prefix: usize, value_len: usize) -> u16 {
    let offset = u16::try_from(prefix.saturating_add(value_len)).unwrap_or(u16::MAX);
    area.x.saturating_add(offset.min(area.width.saturating_sub(1)))
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
