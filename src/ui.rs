use ratatui::{prelude::*, widgets::*};

use crate::app::PageWindow;
use crate::constants::{MISSING_INSCRIPTION, MISSING_YEAR};
use crate::models::ArtworkRecord;

/// Table column headers, after the checkbox column
pub const COLUMN_HEADERS: [&str; 6] = [
    "TITLE",
    "PLACE OF ORIGIN",
    "ARTIST",
    "INSCRIPTIONS",
    "START YEAR",
    "END YEAR",
];

/// Header label for the selection count
pub fn selection_label(count: usize) -> String {
    format!("{} items selected", count)
}

/// Missing inscriptions show "N/A"
pub fn inscription_cell(record: &ArtworkRecord) -> String {
    match record.inscriptions.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => String::from(MISSING_INSCRIPTION),
    }
}

/// Missing years show the raw "undefined" placeholder
pub fn year_cell(year: Option<i64>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| String::from(MISSING_YEAR))
}

/// Display text for the six data columns
pub fn row_cells(record: &ArtworkRecord) -> [String; 6] {
    [
        record.title.clone().unwrap_or_default(),
        record.place_of_origin.clone().unwrap_or_default(),
        record.artist_title.clone().unwrap_or_default(),
        inscription_cell(record),
        year_cell(record.date_start),
        year_cell(record.date_end),
    ]
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Pager: first / prev / numbered / next / last links and the report
pub fn pager_line(window: &PageWindow) -> Line<'static> {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);
    let back = if window.is_first_page() { disabled } else { enabled };
    let forward = if window.is_last_page() { disabled } else { enabled };

    let mut spans = vec![
        Span::styled(" «« ", back),
        Span::styled(" « ", back),
    ];

    let current = window.page_index();
    for (position, index) in window.page_links().into_iter().enumerate() {
        let label = format!(" {}:{} ", position + 1, index + 1);
        let style = if index == current {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::styled(" » ", forward));
    spans.push(Span::styled(" »» ", forward));
    spans.push(Span::raw("   "));
    spans.push(Span::styled(window.report(), Style::default().fg(Color::Gray)));

    Line::from(spans)
}

/// Renders a single-line input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    let text = if content.is_empty() && !is_focused {
        Span::styled("e.g. 10", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(content)
    };

    Paragraph::new(text).block(block)
}
