//! Render state - data structure sent from App layer to UI for rendering

use std::collections::HashSet;

use crate::app::pagination::PageWindow;
use crate::messages::ui_events::InputMode;
use crate::models::ArtworkRecord;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Table
    pub rows: Vec<ArtworkRecord>,
    pub selected_ids: HashSet<u64>,
    pub selection_count: usize,
    pub cursor_row: usize,
    pub is_loading: bool,

    // Pager
    pub window: PageWindow,

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

impl RenderState {
    pub fn is_selected(&self, record: &ArtworkRecord) -> bool {
        self.selected_ids.contains(&record.id)
    }
}
