//! Network actor - runs page fetches in Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.timeout()),
            base_url: config.base_url.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPage { id, api_page, limit }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            // Superseded fetches run to completion; the App drops their result
                            self.active_requests.spawn(async move {
                                tracing::info!(id, api_page, limit, "Fetching page");
                                let result = execute_fetch(&client, &base_url, api_page, limit, id).await;
                                tracing::info!(id, time_ms = result.time_ms(), "Fetch settled");
                                let _ = response_tx.send(result);
                            });
                        }
                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        if e.is_panic() {
                            tracing::error!("Fetch task panicked: {}", e);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_reports_failure() {
        let config = Config {
            // Port 9 (discard) on loopback is closed in test environments
            base_url: String::from("http://127.0.0.1:9/api/v1"),
            timeout_secs: 2,
            ..Config::default()
        };
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(&config, resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::FetchPage { id: 7, api_page: 1, limit: 12 })
            .unwrap();
        match resp_rx.recv().await.unwrap() {
            NetworkResponse::PageFailed { id, .. } => assert_eq!(id, 7),
            other => panic!("expected failure, got {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
