//! Command handlers - business logic for processing UI events

use crate::app::selection::{first_n, parse_pending_count};
use crate::app::AppState;
use crate::error::SelectError;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::ArtworkRecord;

impl AppState {
    // ========================
    // Pagination
    // ========================

    /// Move the window to `offset` and request the page containing it.
    ///
    /// The selection is left alone.
    pub fn set_offset(&mut self, offset: u64) -> NetworkCommand {
        self.window.offset = offset;
        self.is_loading = true;

        let id = self.next_id();
        self.pending_request_id = Some(id);
        let api_page = self.window.api_page();
        tracing::info!(id, offset, api_page, "Requesting page");

        NetworkCommand::FetchPage {
            id,
            api_page,
            limit: self.window.page_size,
        }
    }

    pub fn first_page(&mut self) -> Option<NetworkCommand> {
        self.window.first().map(|o| self.set_offset(o))
    }

    pub fn prev_page(&mut self) -> Option<NetworkCommand> {
        self.window.prev().map(|o| self.set_offset(o))
    }

    pub fn next_page(&mut self) -> Option<NetworkCommand> {
        self.window.next().map(|o| self.set_offset(o))
    }

    pub fn last_page(&mut self) -> Option<NetworkCommand> {
        self.window.last().map(|o| self.set_offset(o))
    }

    /// Follow the `position`-th numbered link of the pager
    pub fn page_link(&mut self, position: usize) -> Option<NetworkCommand> {
        let index = *self.window.page_links().get(position)?;
        self.window.goto_page(index).map(|o| self.set_offset(o))
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a fetch result.
    ///
    /// Returns a follow-up fetch when the reported total shrank below the
    /// current offset and the window has to move back to the last page.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        let id = response.id();
        if self.pending_request_id != Some(id) {
            tracing::debug!(id, pending = ?self.pending_request_id, "Dropping superseded response");
            return None;
        }

        self.last_time_ms = response.time_ms();
        match response {
            NetworkResponse::PageLoaded { page, .. } => {
                tracing::info!(id, rows = page.data.len(), total = page.pagination.total, "Page loaded");
                self.rows = page.data;
                self.window.total_records = page.pagination.total;
                self.cursor_row = 0;
                self.last_error = None;
                self.last_loaded = Some(chrono::Local::now());
            }
            NetworkResponse::PageFailed { message, .. } => {
                tracing::warn!(id, offset = self.window.offset, %message, "Error fetching page");
                self.last_error = Some(message);
            }
        }

        self.is_loading = false;
        self.pending_request_id = None;

        let total = self.window.total_records;
        if total > 0 && self.window.offset >= total {
            let last = self.window.offset_of_page(self.window.page_count() - 1);
            tracing::info!(offset = self.window.offset, total, last, "Total shrank past current page");
            return Some(self.set_offset(last));
        }
        None
    }

    // ========================
    // Selection
    // ========================

    /// Wholesale replacement of the selection, as produced by the table
    pub fn toggle_selection(&mut self, new_set: Vec<ArtworkRecord>) {
        self.selection.replace(new_set);
        tracing::debug!(
            selected = ?self.selection.records().iter().map(|r| r.id).collect::<Vec<_>>(),
            "Selection changed"
        );
    }

    /// Check or uncheck the row under the cursor
    pub fn toggle_row(&mut self) {
        if let Some(row) = self.current_row() {
            let next = self.selection.toggled(row);
            self.toggle_selection(next);
        }
    }

    /// Header checkbox: select the whole page, or clear it if already selected
    pub fn toggle_page(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = if self.selection.covers_page(&self.rows) {
            self.selection.without_page(&self.rows)
        } else {
            self.selection.with_page(&self.rows)
        };
        self.toggle_selection(next);
    }

    /// Select the first `n` rows of the loaded page, returns how many were selected
    pub fn select_first_n(&mut self, n: usize) -> usize {
        let picked = first_n(&self.rows, n);
        let count = picked.len();
        self.toggle_selection(picked);
        count
    }

    /// Submit the count form.
    ///
    /// Invalid input raises the alert and leaves selection and input untouched.
    pub fn submit_count(&mut self) -> Result<usize, SelectError> {
        let n = match parse_pending_count(&self.count_input) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(input = %self.count_input, "Rejected row count");
                self.alert = Some(e.to_string());
                return Err(e);
            }
        };

        let count = self.select_first_n(n);
        tracing::info!(requested = n, selected = count, "Selected first rows");
        self.count_input.clear();
        self.input_mode = InputMode::Normal;
        Ok(count)
    }

    // ========================
    // Count input
    // ========================

    pub fn focus_count_input(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn leave_count_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Only digits are accepted
    pub fn count_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.count_input.push(c);
        }
    }

    pub fn count_backspace(&mut self) {
        self.count_input.pop();
    }

    // ========================
    // Table cursor
    // ========================

    pub fn cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor_row + 1 < self.rows.len() {
            self.cursor_row += 1;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
