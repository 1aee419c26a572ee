//! App state - pure data structure with no I/O logic

use crate::app::pagination::PageWindow;
use crate::app::selection::SelectionSet;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::ArtworkRecord;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Pagination
    pub window: PageWindow,
    pub rows: Vec<ArtworkRecord>,
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Selection
    pub selection: SelectionSet,
    pub cursor_row: usize,

    // Count form
    pub input_mode: InputMode,
    pub count_input: String,

    // Status
    pub last_error: Option<String>,
    pub last_loaded: Option<chrono::DateTime<chrono::Local>>,
    pub last_time_ms: u64,

    // Popups
    pub show_help: bool,
    pub alert: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            window: PageWindow::default(),
            rows: Vec::new(),
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            selection: SelectionSet::new(),
            cursor_row: 0,
            input_mode: InputMode::Normal,
            count_input: String::new(),
            last_error: None,
            last_loaded: None,
            last_time_ms: 0,
            show_help: false,
            alert: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Row under the table cursor
    pub fn current_row(&self) -> Option<&ArtworkRecord> {
        self.rows.get(self.cursor_row)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            rows: self.rows.clone(),
            selected_ids: self.selection.records().iter().map(|r| r.id).collect(),
            selection_count: self.selection.len(),
            cursor_row: self.cursor_row,
            is_loading: self.is_loading,
            window: self.window,
            input_mode: self.input_mode,
            count_input: self.count_input.clone(),
            last_error: self.last_error.clone(),
            last_loaded: self.last_loaded,
            last_time_ms: self.last_time_ms,
            show_help: self.show_help,
            alert: self.alert.clone(),
        }
    }
}
