use std::time::Duration;

use veggiecount::scrapers::http_scraper::HttpScraper;
use veggiecount::scrapers::{
    BackoffPolicy, ContentRetryCondition, RetryCondition, RetryConfig,
};
use veggiecount::{Runner, ScrapeConfig, ScraperResult};

#[tokio::main]
async fn main() -> ScraperResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let retry_config = RetryConfig {
        max_retries: 5,
        initial_delay: Duration::from_secs(1),
        max_delay: Duration::from_secs(30),
        retry_conditions: vec![
            RetryCondition::StatusCode(429),
            RetryCondition::StatusCode(502),
            RetryCondition::StatusCode(503),
            RetryCondition::Content(ContentRetryCondition {
                pattern: "rate limit|too many requests".to_string(),
                is_regex: true,
            }),
        ],
        backoff_policy: BackoffPolicy::Exponential { factor: 2.0 },
    };

    let config = ScrapeConfig::default();
    let scraper = Box::new(HttpScraper::with_config(retry_config));
    let runner = Runner::new(scraper);

    runner.run(&config).await?;
    runner.stats().print_summary();

    Ok(())
}
