//! Artwork Browser - actor-based terminal UI over the artworks API
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async page fetching

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use artwork_browser::constants::{APP_NAME, APP_VERSION};
use artwork_browser::messages::ui_events::{key_to_ui_event, InputMode};
use artwork_browser::ui::{checkbox, pager_line, render_input, row_cells, selection_label, COLUMN_HEADERS};
use artwork_browser::{AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config errors are reported before the terminal is taken over
    let config = Config::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!(base_url = %config.base_url, "Starting {} {}", APP_NAME, APP_VERSION);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(&config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.alert.is_some(),
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Selection label + count form
            Constraint::Min(5),     // Table
            Constraint::Length(1),  // Pager
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_table(f, state, chunks[1]);
    f.render_widget(Paragraph::new(pager_line(&state.window)), chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),     // Selection label
            Constraint::Length(24),  // Count input
            Constraint::Length(11),  // Apply
        ])
        .split(area);

    let label = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} {} ", APP_NAME, APP_VERSION), Style::default().fg(Color::DarkGray)),
        Span::styled(
            selection_label(state.selection_count),
            Style::default().fg(Color::Magenta).bold(),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(label, chunks[0]);

    let editing = state.input_mode == InputMode::Editing;
    f.render_widget(render_input(&state.count_input, " Select rows (n) ", editing), chunks[1]);

    let apply_style = if editing {
        Style::default().fg(Color::Black).bg(Color::Blue).bold()
    } else {
        Style::default().fg(Color::Blue)
    };
    let apply = Paragraph::new(" Apply ⏎")
        .style(apply_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(apply, chunks[2]);

    if editing {
        let max_x = chunks[1].x + chunks[1].width.saturating_sub(2);
        let cursor_x = (chunks[1].x + state.count_input.len() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));
    }
}

fn draw_table(f: &mut Frame, state: &RenderState, area: Rect) {
    let page_checked = !state.rows.is_empty() && state.rows.iter().all(|r| state.is_selected(r));

    let header = Row::new(
        std::iter::once(checkbox(page_checked))
            .chain(COLUMN_HEADERS)
            .map(|h| Cell::from(h).style(Style::default().bold())),
    )
    .style(Style::default().fg(Color::Cyan))
    .bottom_margin(1);

    let rows: Vec<Row> = state
        .rows
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let cells = std::iter::once(checkbox(state.is_selected(record)).to_string())
                .chain(row_cells(record))
                .map(Cell::from);
            let style = if state.is_selected(record) {
                Style::default().fg(Color::Yellow)
            } else if i % 2 == 1 {
                Style::default().bg(Color::Rgb(30, 30, 40))
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let title = if state.is_loading { " Artworks [loading...] " } else { " Artworks " };
    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(24),
        Constraint::Percentage(14),
        Constraint::Percentage(18),
        Constraint::Percentage(24),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default();
    if !state.rows.is_empty() {
        table_state.select(Some(state.cursor_row));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        String::from(" Loading... ")
    } else if state.input_mode == InputMode::Editing {
        String::from(" digits:count | Enter:apply | Esc:back ")
    } else if let Some(err) = &state.last_error {
        format!(" Last fetch failed: {} | ←/→:page | q:quit ", err)
    } else {
        let loaded = state
            .last_loaded
            .map(|t| format!(" loaded {} ({}ms) |", t.format("%H:%M:%S"), state.last_time_ms))
            .unwrap_or_default();
        format!("{} Space:select | a:page | ←/→:page | n:count | ?:help | q:quit ", loaded)
    };

    let style = if state.last_error.is_some() && !state.is_loading {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(status).style(style), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 ARTWORK BROWSER - Keyboard Shortcuts

 TABLE
   ↑ / k, ↓ / j       Move row cursor
   Space              Select / unselect row
   a                  Select / clear whole page

 PAGES
   Home / g           First page
   ← / h              Previous page
   1 - 5              Numbered page link
   → / l              Next page
   End / G            Last page

 SELECT FIRST N ROWS
   n / Tab            Focus the count input
   Enter              Apply
   Esc                Back to the table

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Alert ")
        .title_bottom(Line::from(" press any key ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let alert = Paragraph::new(format!("\n{}", message))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
