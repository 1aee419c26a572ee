//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Initial load of the first page
        let cmd = self.state.set_offset(0);
        let _ = self.network_tx.send(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    if let Some(cmd) = self.state.handle_response(response) {
                        let _ = self.network_tx.send(cmd);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let command = match event {
            // Table cursor
            UiEvent::CursorUp => { self.state.cursor_up(); None }
            UiEvent::CursorDown => { self.state.cursor_down(); None }

            // Selection
            UiEvent::ToggleRow => { self.state.toggle_row(); None }
            UiEvent::TogglePage => { self.state.toggle_page(); None }

            // Pager
            UiEvent::FirstPage => self.state.first_page(),
            UiEvent::PrevPage => self.state.prev_page(),
            UiEvent::NextPage => self.state.next_page(),
            UiEvent::LastPage => self.state.last_page(),
            UiEvent::PageLink(position) => self.state.page_link(position),

            // Count form
            UiEvent::FocusCountInput => { self.state.focus_count_input(); None }
            UiEvent::LeaveCountInput => { self.state.leave_count_input(); None }
            UiEvent::CountChar(c) => { self.state.count_char(c); None }
            UiEvent::CountBackspace => { self.state.count_backspace(); None }
            UiEvent::SubmitCount => {
                // Rejection is surfaced through the alert popup
                let _ = self.state.submit_count();
                None
            }

            // Popups
            UiEvent::ToggleHelp => { self.state.toggle_help(); None }
            UiEvent::CloseHelp => { self.state.close_help(); None }
            UiEvent::DismissAlert => { self.state.dismiss_alert(); None }

            // System
            UiEvent::Quit => return true,
        };

        if let Some(cmd) = command {
            let _ = self.network_tx.send(cmd);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtworkPage, ArtworkRecord, Pagination};

    #[tokio::test]
    async fn test_actor_initial_fetch_and_navigation() {
        let (net_tx, mut net_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(net_tx, render_tx).run(ui_rx, resp_rx));

        // Mount fires a fetch for page 1 and renders in loading state
        let first = net_rx.recv().await.unwrap();
        assert_eq!(
            first,
            NetworkCommand::FetchPage { id: 1, api_page: 1, limit: 12 }
        );
        assert!(render_rx.recv().await.unwrap().is_loading);

        resp_tx
            .send(NetworkResponse::PageLoaded {
                id: 1,
                page: ArtworkPage {
                    data: (1..=12).map(ArtworkRecord::new).collect(),
                    pagination: Pagination { total: 50 },
                },
                time_ms: 3,
            })
            .unwrap();
        let rendered = render_rx.recv().await.unwrap();
        assert!(!rendered.is_loading);
        assert_eq!(rendered.rows.len(), 12);

        ui_tx.send(UiEvent::NextPage).unwrap();
        assert_eq!(
            net_rx.recv().await.unwrap(),
            NetworkCommand::FetchPage { id: 2, api_page: 2, limit: 12 }
        );
        assert!(render_rx.recv().await.unwrap().is_loading);

        ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(net_rx.recv().await.unwrap(), NetworkCommand::Shutdown);
        handle.await.unwrap();
    }
}
