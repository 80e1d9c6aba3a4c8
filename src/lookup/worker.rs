use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::client::LookupClient;
use super::commands::{LookupCommand, LookupResponse};

/// Launches the background lookup worker thread and returns communication
/// channels plus the shared latest-request id.
pub(crate) fn spawn(
    client: LookupClient,
) -> (
    Sender<LookupCommand>,
    Receiver<LookupResponse>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let latest_request_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_request_id);

    thread::spawn(move || worker_loop(&client, &command_rx, &response_tx, &thread_latest));

    (command_tx, response_rx, latest_request_id)
}

fn worker_loop(
    client: &LookupClient,
    command_rx: &Receiver<LookupCommand>,
    response_tx: &Sender<LookupResponse>,
    latest_request_id: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(client, response_tx, latest_request_id, command) {
            break;
        }
    }
}

fn handle_command(
    client: &LookupClient,
    response_tx: &Sender<LookupResponse>,
    latest_request_id: &AtomicU64,
    command: LookupCommand,
) -> bool {
    match command {
        LookupCommand::Fetch { id, identifier } => {
            // A newer submission may already be queued behind this one;
            // skip the HTTP call for requests that are no longer current.
            if latest_request_id.load(Ordering::Acquire) != id {
                tracing::debug!(request_id = id, "skipping superseded lookup");
                return true;
            }

            let result = client.fetch(&identifier);
            match &result {
                Ok(_) => tracing::info!(request_id = id, %identifier, "lookup resolved"),
                Err(err) => {
                    tracing::warn!(request_id = id, %identifier, error = %err, "lookup failed");
                }
            }
            let _ = response_tx.send(LookupResponse { id, result });
            true
        }
        LookupCommand::Shutdown => false,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_client() -> LookupClient {
        LookupClient::new("http://127.0.0.1:1", Duration::from_secs(1)).expect("client builds")
    }

    #[test]
    fn shutdown_command_stops_worker() {
        let (tx, _rx, latest) = spawn(test_client());
        assert_eq!(latest.load(Ordering::Relaxed), 0);
        tx.send(LookupCommand::Shutdown).unwrap();
    }

    #[test]
    fn superseded_fetch_is_skipped_without_a_response() {
        let (tx, rx, latest) = spawn(test_client());

        // Publish a newer id, then queue a stale fetch behind it.
        latest.store(2, Ordering::Release);
        tx.send(LookupCommand::Fetch {
            id: 1,
            identifier: "old".to_string(),
        })
        .unwrap();
        tx.send(LookupCommand::Shutdown).unwrap();

        assert!(rx.recv_timeout(Duration::from_secs(2)).is_err());
    }
}
