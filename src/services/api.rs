use std::collections::{HashSet, VecDeque};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{DriveClient, Entry};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !crate::DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crate::utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated navigation and popups
    Medium, // Refreshes of the visible listing
    Low,    // Preview byte fetches
}

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Children { prefix: String },
    Preview { key: String },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List entries under a working-directory prefix
    ListChildren { prefix: String, priority: Priority },

    /// Download the bytes behind a resolved preview URL
    FetchPreview {
        key: String,
        url: String,
        priority: Priority,
    },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::ListChildren { priority, .. } => *priority,
            ApiRequest::FetchPreview { priority, .. } => *priority,
        }
    }

    /// Generate a unique key for deduplication
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::ListChildren { prefix, .. } => RequestKey::Children {
                prefix: prefix.clone(),
            },
            ApiRequest::FetchPreview { key, .. } => RequestKey::Preview { key: key.clone() },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ChildrenResult {
        prefix: String,
        entries: Result<Vec<Entry>, anyhow::Error>,
    },

    PreviewResult {
        key: String,
        bytes: Result<Vec<u8>, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: DriveClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: DriveClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4, // The store is a single origin; be polite
        }
    }

    /// Add a request to the queue, high priority at the front.
    ///
    /// A request whose key is already queued or in flight is dropped; the
    /// earlier one will answer for both.
    fn enqueue(&mut self, request: ApiRequest) {
        let key = request.key();
        if self.in_flight.contains(&key)
            || self.request_queue.iter().any(|(queued, _)| queued.key() == key)
        {
            return;
        }

        let priority = request.priority();
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let completion_key = key;

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(completion_key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &DriveClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::ListChildren { prefix, .. } => {
                log_debug(&format!("[API Service] Listing prefix={:?}", prefix));
                let entries = client.list_children(&prefix).await;

                ApiResponse::ChildrenResult { prefix, entries }
            }

            ApiRequest::FetchPreview { key, url, .. } => {
                let bytes = client.fetch_preview(&url).await.map_err(|e| {
                    log_debug(&format!(
                        "[API Service] Preview fetch failed key={} error={}",
                        key, e
                    ));
                    e
                });

                ApiResponse::PreviewResult { key, bytes }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DriveClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    for _ in 0..4 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
