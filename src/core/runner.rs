use super::{ScrapeConfig, ScraperError, ScraperResult};
use crate::export::CsvExporter;
use crate::extract::{Extractor, StateCount};
use crate::scrapers::Scraper;
use crate::stats::StatsTracker;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

/// Drives one run end to end: fetch the page, extract the per-state
/// records, export them as CSV.
pub struct Runner {
    scraper: Box<dyn Scraper>,
    stats: Arc<StatsTracker>,
}

impl Runner {
    pub fn new(scraper: Box<dyn Scraper>) -> Self {
        info!("Initializing runner");
        Self {
            scraper,
            stats: Arc::new(StatsTracker::new()),
        }
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub async fn run(&self, config: &ScrapeConfig) -> ScraperResult<Vec<StateCount>> {
        // Selector errors surface before any network traffic.
        let extractor = Extractor::from_config(config)?;

        let started = Utc::now();
        let response = self.scraper.fetch(config.url.clone()).await?;
        self.stats.record_request(
            response.status,
            response.body.len(),
            Utc::now().signed_duration_since(started),
            response.retry_count,
        );

        if !(200..300).contains(&response.status) {
            return Err(ScraperError::HttpStatus {
                status: response.status,
                url: response.url,
            });
        }

        let extraction = extractor.extract(&response.body)?;
        if extraction.partial_entries > 0 {
            warn!(
                "{} entries had only one of label/count populated and were skipped",
                extraction.partial_entries
            );
        }
        self.stats
            .record_extraction(extraction.records.len(), extraction.partial_entries);

        let path = CsvExporter::new(&config.output_path).export(&extraction.records)?;
        info!(
            "Wrote {} state rows to {}",
            extraction.records.len(),
            path.display()
        );

        self.stats.finish();
        Ok(extraction.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::http_scraper::HttpScraper;
    use std::fs;
    use tempfile::tempdir;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REGION_PAGE: &str = "<html><head><title>Vegan &amp; Vegetarian Restaurants in USA</title></head>\
        <body><div class=\"region-list\">\
        <a href=\"/alabama\"><div><div>Alabama</div><div>(257)</div></div></a>\
        <a href=\"/alaska\"><div><div>Alaska</div><div>(71)</div></div></a>\
        <a href=\"#\"><div><div></div><div></div></div></a>\
        </div></body></html>";

    async fn serve(body: &str, status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usa/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer, output: &std::path::Path) -> ScrapeConfig {
        ScrapeConfig::default()
            .with_url(Url::parse(&format!("{}/usa/", server.uri())).unwrap())
            .with_output_path(output)
    }

    #[tokio::test]
    async fn test_run_exports_one_row_per_entry_pair() {
        let server = serve(REGION_PAGE, 200).await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("per_state.csv");
        let config = config_for(&server, &output);

        let runner = Runner::new(Box::new(HttpScraper::new()));
        let records = runner.run(&config).await.unwrap();

        assert_eq!(records.len(), 2);
        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(
            contents,
            "state,num_of_restaurants\nAlabama,257\nAlaska,71\n"
        );

        let stats = runner.stats().get_stats();
        assert_eq!(stats.records_extracted, 2);
        assert_eq!(stats.total_requests, 1);
    }

    #[tokio::test]
    async fn test_run_aborts_on_title_mismatch_without_writing() {
        let page = "<html><head><title>Access Denied</title></head><body></body></html>";
        let server = serve(page, 200).await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("per_state.csv");
        let config = config_for(&server, &output);

        let runner = Runner::new(Box::new(HttpScraper::new()));
        let err = runner.run(&config).await.unwrap_err();

        assert!(matches!(err, ScraperError::TitleMismatch { .. }));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_run_fails_on_persistent_error_status() {
        let server = serve("gone", 404).await;
        let dir = tempdir().unwrap();
        let config = config_for(&server, &dir.path().join("per_state.csv"));

        let runner = Runner::new(Box::new(HttpScraper::new()));
        let err = runner.run(&config).await.unwrap_err();

        assert!(matches!(err, ScraperError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_run_twice_produces_identical_tables() {
        let server = serve(REGION_PAGE, 200).await;
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        let runner = Runner::new(Box::new(HttpScraper::new()));
        runner.run(&config_for(&server, &first)).await.unwrap();
        runner.run(&config_for(&server, &second)).await.unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
