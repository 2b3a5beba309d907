//! Application state and input handling.
//!
//! The handlers mutate [`AppState`] in place. Mouse hit-testing uses the
//! screen regions recorded by the renderer on the previous frame.

use crate::model::RosterEntry;
use crate::theme::ThemeConfig;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use unicode_width::UnicodeWidthStr;

pub const SCROLL_LINES: usize = 1;
/// Columns moved per Left/Right key press, matching one scrollbar arrow step.
pub const H_SCROLL_STEP: u16 = 1;

/// Which widget currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusWidget {
    List,
    QuitButton,
}

/// Application state for the door-status window.
pub struct AppState {
    /// Scraped rows shown in the list box.
    pub entries: Vec<RosterEntry>,
    /// Display lines, built once from `entries`.
    pub lines: Vec<String>,
    /// Widest display line in terminal columns.
    pub max_line_width: u16,
    /// List selection state managed by ratatui.
    pub list_state: ListState,
    /// Horizontal scroll offset in columns.
    pub h_scroll: u16,
    /// Which widget has keyboard focus.
    pub focused: FocusWidget,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Window title ("EAA690 RFID Door" or "Sample application").
    pub title: String,
    /// Scrape diagnostic mirrored in the status bar.
    pub status_line: String,
    /// Where the page came from, for the status bar.
    pub source: String,
    /// Flag to quit app.
    pub should_quit: bool,
    /// Screen region of the list pane (including borders).
    pub list_area: Option<Rect>,
    /// Screen region of list content (inside borders).
    pub list_content_area: Option<Rect>,
    /// Screen region of the quit button.
    pub button_area: Option<Rect>,
}

impl AppState {
    pub fn new(
        entries: Vec<RosterEntry>,
        theme: ThemeConfig,
        title: String,
        status_line: String,
        source: String,
    ) -> Self {
        let lines: Vec<String> = entries.iter().map(RosterEntry::display_line).collect();
        let max_line_width = lines.iter().map(|line| line.width() as u16).max().unwrap_or(0);
        let mut list_state = ListState::default();
        if entries.is_empty() {
            list_state.select(None);
        } else {
            list_state.select(Some(0));
        }

        Self {
            entries,
            lines,
            max_line_width,
            list_state,
            h_scroll: 0,
            focused: FocusWidget::List,
            theme,
            title,
            status_line,
            source,
            should_quit: false,
            list_area: None,
            list_content_area: None,
            button_area: None,
        }
    }

    /// Clamps the current list selection to valid bounds.
    pub fn clamp_selection(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }

        if let Some(selected) = self.list_state.selected()
            && selected >= len
        {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Moves selection by `direction` (+1 or -1).
    pub fn move_selection(&mut self, direction: i32) {
        if self.entries.is_empty() {
            return;
        }
        if direction < 0 {
            self.list_state.select_previous();
        } else {
            self.list_state.select_next();
        }
        self.clamp_selection();
    }

    /// Columns hidden past the right edge at the current list width.
    pub fn max_h_scroll(&self) -> u16 {
        let visible = self.list_content_area.map(|area| area.width).unwrap_or(0);
        self.max_line_width.saturating_sub(visible)
    }

    pub fn scroll_left(&mut self) {
        self.h_scroll = self.h_scroll.saturating_sub(H_SCROLL_STEP);
    }

    pub fn scroll_right(&mut self) {
        self.h_scroll = (self.h_scroll + H_SCROLL_STEP).min(self.max_h_scroll());
    }

    /// Tab order is just the list and the quit button.
    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            FocusWidget::List => FocusWidget::QuitButton,
            FocusWidget::QuitButton => FocusWidget::List,
        };
    }
}

/// Handle a key event, mutating `app` in place.
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.focused == FocusWidget::QuitButton {
                app.should_quit = true;
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Home => {
            if !app.entries.is_empty() {
                app.list_state.select(Some(0));
            }
        }
        KeyCode::End => {
            let len = app.entries.len();
            if len > 0 {
                app.list_state.select(Some(len - 1));
            }
        }
        KeyCode::PageUp => {
            let page_size = app.list_area.map(|area| area.height).unwrap_or(10) as usize;
            let current = app.list_state.selected().unwrap_or(0);
            if !app.entries.is_empty() {
                app.list_state.select(Some(current.saturating_sub(page_size)));
            }
        }
        KeyCode::PageDown => {
            let page_size = app.list_area.map(|area| area.height).unwrap_or(10) as usize;
            let current = app.list_state.selected().unwrap_or(0);
            let len = app.entries.len();
            if len > 0 {
                app.list_state.select(Some((current + page_size).min(len - 1)));
            }
        }
        KeyCode::Left => app.scroll_left(),
        KeyCode::Right => app.scroll_right(),
        _ => {}
    }
}

/// Handle a mouse event.
///
/// Returns `true` if the UI needs to be redrawn.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) -> bool {
    let position = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let over_list = app
                .list_area
                .is_some_and(|area| area.contains(position.into()));
            if over_list && !app.entries.is_empty() {
                for _ in 0..SCROLL_LINES {
                    if mouse.kind == MouseEventKind::ScrollDown {
                        app.list_state.select_next();
                    } else {
                        app.list_state.select_previous();
                    }
                }
                app.clamp_selection();
                return true;
            }
            false
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = app.button_area
                && area.contains(position.into())
            {
                app.should_quit = true;
                return true;
            }

            if let Some(content_area) = app.list_content_area
                && content_area.contains(position.into())
            {
                app.focused = FocusWidget::List;
                if !app.entries.is_empty() {
                    let list_row = mouse.row.saturating_sub(content_area.y) as usize;
                    if list_row < content_area.height as usize {
                        let top_index = app.list_state.offset();
                        let clicked = (top_index + list_row).min(app.entries.len() - 1);
                        app.list_state.select(Some(clicked));
                    }
                }
                return true;
            }

            if let Some(area) = app.list_area
                && area.contains(position.into())
            {
                app.focused = FocusWidget::List;
                return true;
            }

            false
        }
        _ => false,
    }
}
