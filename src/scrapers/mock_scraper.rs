use super::{Response, RetryConfig, Scraper};
use crate::core::ScraperResult;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::sleep;
use url::Url;

#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<std::time::Duration>,
}

/// Serves a scripted sequence of responses, cycling when exhausted.
#[derive(Clone)]
pub struct MockScraper {
    retry_config: RetryConfig,
    responses: Arc<Vec<MockResponse>>,
    current_response: Arc<AtomicUsize>,
}

impl MockScraper {
    pub fn new(retry_config: RetryConfig, responses: Vec<MockResponse>) -> Self {
        Self {
            retry_config,
            responses: Arc::new(responses),
            current_response: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Scraper for MockScraper {
    async fn fetch_single(&self, url: Url) -> ScraperResult<Response> {
        let index = self.current_response.fetch_add(1, Ordering::SeqCst);
        let response = &self.responses[index % self.responses.len()];

        if let Some(delay) = response.delay {
            sleep(delay).await;
        }

        Ok(Response {
            url,
            status: response.status,
            headers: HashMap::new(),
            body: response.body.clone(),
            timestamp: Utc::now(),
            retry_count: 0,
        })
    }

    fn box_clone(&self) -> Box<dyn Scraper> {
        Box::new(self.clone())
    }

    fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }
}
