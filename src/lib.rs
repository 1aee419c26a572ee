//! # Artwork Browser
//!
//! A terminal browser for the Art Institute of Chicago artwork collection.
//!
//! ## Features
//! - Paginated artwork table, 12 rows per page
//! - Row selection that survives page changes
//! - "Select first N rows" form
//! - First / previous / numbered / next / last page navigation
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, PageWindow, SelectionSet};
pub use config::Config;
pub use error::{FetchError, SelectError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{ArtworkPage, ArtworkRecord, Pagination};
pub use network::NetworkActor;
