use super::response::Response;
use super::retry::RetryConfig;
use crate::core::ScraperResult;
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::time::sleep;
use url::Url;

#[async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch_single(&self, url: Url) -> ScraperResult<Response>;
    fn box_clone(&self) -> Box<dyn Scraper>;
    fn retry_config(&self) -> &RetryConfig;

    async fn fetch(&self, url: Url) -> ScraperResult<Response> {
        let mut attempt = 0;

        loop {
            info!("Fetching URL: {}", url);
            let response = self.fetch_single(url.clone()).await?;
            debug!(
                "Received response: status={}, body_length={}",
                response.status,
                response.body.len()
            );

            if let Some(delay) =
                self.retry_config()
                    .next_delay(response.status, &response.body, attempt)
            {
                attempt += 1;
                warn!(
                    "Retry triggered for URL: {} (attempt={}/{}, status={}, delay={:?})",
                    url,
                    attempt,
                    self.retry_config().max_retries,
                    response.status,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            info!(
                "Request completed for URL: {} (retries={}, status={})",
                url, attempt, response.status
            );

            return Ok(Response {
                retry_count: attempt,
                ..response
            });
        }
    }
}
