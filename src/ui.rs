use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};
use unicode_width::UnicodeWidthChar;

use crate::app::{AppState, FocusWidget};
use crate::scrape::NOTHING_FOUND;

/// Main UI entry point that renders the entire application layout.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // List box - takes all space
            Constraint::Length(3), // Quit button
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    app.list_area = Some(chunks[0]);

    render_roster_list(f, app, chunks[0]);
    render_quit_button(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

/// Renders the scrollable list of roster entries with both scrollbars.
fn render_roster_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let is_focused = app.focused == FocusWidget::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            app.theme.border_selected
        } else {
            app.theme.border
        })
        .title_style(app.theme.title)
        .title(format!(" {} ({}) ", app.title, app.entries.len()))
        .title_alignment(Alignment::Left)
        .style(app.theme.list_normal);

    let content = block.inner(area);
    app.list_content_area = Some(content);

    let items: Vec<ListItem> = app
        .lines
        .iter()
        .map(|line| ListItem::new(clip_columns(line, app.h_scroll)))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(app.theme.list_normal)
        .scroll_padding(2)
        .highlight_style(app.theme.list_selected);

    f.render_stateful_widget(list, area, &mut app.list_state);

    // Vertical scrollbar on the right edge
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
    let mut scrollbar_state = ScrollbarState::new(app.entries.len())
        .position(app.list_state.selected().unwrap_or(0));
    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );

    // Horizontal scrollbar on the bottom edge
    let overflow = app.max_line_width.saturating_sub(content.width) as usize;
    let h_scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom);
    let mut h_scrollbar_state = ScrollbarState::new(overflow).position(app.h_scroll as usize);
    f.render_stateful_widget(
        h_scrollbar,
        area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        }),
        &mut h_scrollbar_state,
    );
}

/// Renders the quit button centered in its row.
fn render_quit_button(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(area);

    app.button_area = Some(chunks[1]);

    let is_focused = app.focused == FocusWidget::QuitButton;
    let button = Paragraph::new(Line::from(Span::styled("Quit", app.theme.title)))
        .alignment(Alignment::Center)
        .style(app.theme.text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    app.theme.border_selected
                } else {
                    app.theme.border
                }),
        );
    f.render_widget(button, chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let key_style = app.theme.title;
    let bar_style = app.theme.text.add_modifier(Modifier::DIM);

    let shortcuts = Line::from(vec![
        Span::styled("↑/↓ ", key_style),
        Span::raw("move  "),
        Span::styled("Tab ", key_style),
        Span::raw("focus  "),
        Span::styled("q ", key_style),
        Span::raw("quit"),
    ]);
    f.render_widget(
        Paragraph::new(shortcuts)
            .style(bar_style)
            .alignment(Alignment::Left),
        chunks[0],
    );

    let status = if app.status_line.is_empty() {
        Line::from("")
    } else if app.status_line == NOTHING_FOUND {
        Line::from(app.status_line.as_str())
    } else {
        Line::from(format!("Door: {}", app.status_line))
    };
    f.render_widget(
        Paragraph::new(status)
            .style(bar_style)
            .alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(app.source.as_str()))
            .style(bar_style)
            .alignment(Alignment::Right),
        chunks[2],
    );
}

/// Drops the first `skip` columns of `line`, keeping later characters whole.
/// A wide glyph straddling the cut is padded with spaces so the clipped line
/// still starts at the requested column.
pub fn clip_columns(line: &str, skip: u16) -> String {
    let skip = skip as usize;
    if skip == 0 {
        return line.to_string();
    }
    let mut remaining = skip;
    let mut out = String::new();
    for ch in line.chars() {
        if remaining == 0 {
            out.push(ch);
            continue;
        }
        let width = ch.width().unwrap_or(0);
        if width <= remaining {
            remaining -= width;
        } else {
            for _ in 0..(width - remaining) {
                out.push(' ');
            }
            remaining = 0;
        }
    }
    out
}
