use std::path::{Path, PathBuf};
use url::Url;

const DEFAULT_URL: &str = "https://www.happycow.net/north_america/usa/";
const DEFAULT_OUTPUT: &str = "veggie_restaurants_per_state.csv";

/// Everything one run needs: where to fetch, how to recognize the page,
/// how to find the state entries inside it, and where the table goes.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: Url,
    /// The run aborts before any extraction if the page title does not
    /// contain this substring.
    pub expected_title: String,
    /// Matches every state entry under the region container.
    pub entry_selector: String,
    /// Matches the state-name field inside one entry.
    pub label_selector: String,
    /// Matches the listing-count field inside one entry.
    pub count_selector: String,
    /// Truncates the discovered entry collection when set.
    pub max_entries: Option<usize>,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).unwrap(),
            expected_title: "Vegan".to_string(),
            entry_selector: "div.region-list a".to_string(),
            label_selector: "div > div:nth-child(1)".to_string(),
            count_selector: "div > div:nth-child(2)".to_string(),
            max_entries: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScrapeConfig {
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    pub fn with_expected_title(mut self, title: &str) -> Self {
        self.expected_title = title.to_string();
        self
    }

    pub fn with_selectors(mut self, entry: &str, label: &str, count: &str) -> Self {
        self.entry_selector = entry.to_string();
        self.label_selector = label.to_string();
        self.count_selector = count.to_string();
        self
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    pub fn with_output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
}
