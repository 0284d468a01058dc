mod response;
mod retry;
mod scraper;
pub mod http_scraper;
pub mod mock_scraper;


pub use response::Response;
pub use retry::{BackoffPolicy, ContentRetryCondition, RetryCondition, RetryConfig};
pub use scraper::Scraper;
