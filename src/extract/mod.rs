use crate::core::{ScrapeConfig, ScraperError, ScraperResult};
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// One exported row: a state name and its number of restaurant listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub num_of_restaurants: u32,
}

/// Outcome of one extraction pass. `partial_entries` counts entries where
/// exactly one of the two fields was empty; those never become records.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<StateCount>,
    pub partial_entries: usize,
}

pub struct Extractor {
    expected_title: String,
    entry_selector: Selector,
    entry_selector_str: String,
    label_selector: Selector,
    count_selector: Selector,
    max_entries: Option<usize>,
}

impl Extractor {
    pub fn from_config(config: &ScrapeConfig) -> ScraperResult<Self> {
        Ok(Self {
            expected_title: config.expected_title.clone(),
            entry_selector: parse_selector(&config.entry_selector)?,
            entry_selector_str: config.entry_selector.clone(),
            label_selector: parse_selector(&config.label_selector)?,
            count_selector: parse_selector(&config.count_selector)?,
            max_entries: config.max_entries,
        })
    }

    /// Reads every state entry out of the page and pairs each label with
    /// its count. Entries are discovered structurally, so the collection
    /// size comes from the document rather than a fixed bound.
    pub fn extract(&self, body: &str) -> ScraperResult<Extraction> {
        let document = Html::parse_document(body);
        self.check_title(&document)?;

        let mut extraction = Extraction::default();
        let mut matched = 0;

        for entry in document.select(&self.entry_selector) {
            if let Some(max) = self.max_entries {
                if matched >= max {
                    break;
                }
            }
            matched += 1;

            let label = first_text(entry, &self.label_selector);
            let count_text = first_text(entry, &self.count_selector);

            match (label.is_empty(), count_text.is_empty()) {
                (false, false) => {
                    let count = parse_count(&count_text)?;
                    debug!("Extracted entry: {} -> {}", label, count);
                    extraction.records.push(StateCount {
                        state: label,
                        num_of_restaurants: count,
                    });
                }
                // Filler entries at the end of the grid carry no text at all.
                (true, true) => {}
                _ => {
                    warn!(
                        "Partial entry skipped: label={:?}, count={:?}",
                        label, count_text
                    );
                    extraction.partial_entries += 1;
                }
            }
        }

        if matched == 0 {
            return Err(ScraperError::NoEntries {
                selector: self.entry_selector_str.clone(),
            });
        }

        Ok(extraction)
    }

    fn check_title(&self, document: &Html) -> ScraperResult<()> {
        let title_selector = Selector::parse("title").unwrap();
        let found = document
            .select(&title_selector)
            .next()
            .map(|element| element.text().collect::<String>())
            .unwrap_or_default();

        if found.contains(&self.expected_title) {
            Ok(())
        } else {
            Err(ScraperError::TitleMismatch {
                expected: self.expected_title.clone(),
                found,
            })
        }
    }
}

/// Counts appear wrapped in punctuation, e.g. `(123)`. The first and last
/// characters are stripped and the remainder parsed as an integer.
pub fn parse_count(raw: &str) -> ScraperResult<u32> {
    let mut chars = raw.trim().chars();
    chars.next();
    chars.next_back();

    chars.as_str().parse::<u32>().map_err(|_| ScraperError::CountParse {
        raw: raw.to_string(),
    })
}

fn parse_selector(selector: &str) -> ScraperResult<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn first_text(entry: ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}
