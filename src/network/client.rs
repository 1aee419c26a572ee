//! HTTP client wrapper - fetches artwork pages

use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::ArtworkPage;

/// Build the page request
fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    api_page: u64,
    limit: u64,
) -> reqwest::RequestBuilder {
    let url = format!("{}/artworks", base_url.trim_end_matches('/'));
    client
        .get(url)
        .query(&[("page", api_page), ("limit", limit)])
        .header("Accept", "application/json")
}

/// Fetch and decode one page
pub async fn fetch_page(
    client: &reqwest::Client,
    base_url: &str,
    api_page: u64,
    limit: u64,
) -> Result<ArtworkPage, FetchError> {
    let resp = build_request(client, base_url, api_page, limit)
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    resp.json::<ArtworkPage>().await.map_err(FetchError::Decode)
}

/// Execute a page fetch and wrap the outcome for the App layer
pub async fn execute_fetch(
    client: &reqwest::Client,
    base_url: &str,
    api_page: u64,
    limit: u64,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_page(client, base_url, api_page, limit).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(page) => NetworkResponse::PageLoaded {
            id: request_id,
            page,
            time_ms: elapsed,
        },
        Err(e) => {
            let message = match &e {
                FetchError::Transport(inner) if inner.is_timeout() => {
                    String::from("Request timed out")
                }
                FetchError::Transport(inner) if inner.is_connect() => {
                    format!("Connection failed: {}", inner)
                }
                other => other.to_string(),
            };
            NetworkResponse::PageFailed {
                id: request_id,
                message,
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("artwork-browser/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r#"{"pagination":{"total":30,"limit":12,"current_page":3},"data":[{"id":11,"title":"Nocturne","inscriptions":null,"date_start":1871,"date_end":null}]}"#;

    /// Serve one canned HTTP response, returning the base URL and the raw request line
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}/api/v1/", addr), handle)
    }

    #[test]
    fn test_build_request_url() {
        let client = reqwest::Client::new();
        let req = build_request(&client, "https://api.artic.edu/api/v1/", 3, 12)
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_body() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", BODY).await;
        let client = create_client(Duration::from_secs(5));

        let page = fetch_page(&client, &base, 3, 12).await.unwrap();
        assert_eq!(page.pagination.total, 30);
        assert_eq!(page.data[0].id, 11);
        assert_eq!(page.data[0].date_end, None);

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /api/v1/artworks?page=3&limit=12 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (base, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let client = create_client(Duration::from_secs(5));

        let err = fetch_page(&client, &base, 1, 12).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"data": "nope"}"#).await;
        let client = create_client(Duration::from_secs(5));

        let response = execute_fetch(&client, &base, 1, 12, 42).await;
        match response {
            NetworkResponse::PageFailed { id, message, .. } => {
                assert_eq!(id, 42);
                assert!(message.starts_with("invalid response body"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        server.await.unwrap();
    }
}
