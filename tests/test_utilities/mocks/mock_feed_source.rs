use async_trait::async_trait;
use evidence_dashboard::prelude::*;
use evidence_dashboard::shared::error::DashboardError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

enum Response {
    Body(String),
    Unavailable(Option<u16>, String),
}

/// Mock FeedSource serving queued responses, one per fetch
///
/// The last queued response is repeated once the queue is drained.
#[derive(Clone)]
pub struct MockFeedSource {
    location: String,
    responses: Arc<Mutex<VecDeque<Response>>>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self {
            location: "./evidence/index.json".to_string(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_body(self, body: &str) -> Self {
        self.push(Response::Body(body.to_string()));
        self
    }

    pub fn with_http_status(self, status: u16, reason: &str) -> Self {
        self.push(Response::Unavailable(Some(status), reason.to_string()));
        self
    }

    pub fn with_transport_error(self, details: &str) -> Self {
        self.push(Response::Unavailable(None, details.to_string()));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn push(&self, response: Response) {
        self.responses.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            None
        };
        let response = response.as_ref().or_else(|| responses.front());

        match response {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Unavailable(status, details)) => Err(DashboardError::FeedUnavailable {
                location: self.location.clone(),
                status: *status,
                details: details.clone(),
            }
            .into()),
            None => Err(anyhow::anyhow!("no mock response queued")),
        }
    }
}
