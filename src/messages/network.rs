//! Network messages - communication between App and Network layers

use crate::models::ArtworkPage;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch one page of artworks
    FetchPage {
        id: u64,
        api_page: u64,
        limit: u64,
    },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Page fetched and decoded
    PageLoaded {
        id: u64,
        page: ArtworkPage,
        time_ms: u64,
    },
    /// Transport, status or decode failure
    PageFailed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PageLoaded { id, .. } => *id,
            NetworkResponse::PageFailed { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::PageLoaded { time_ms, .. } => *time_ms,
            NetworkResponse::PageFailed { time_ms, .. } => *time_ms,
        }
    }
}
