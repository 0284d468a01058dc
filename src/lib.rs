pub mod core;
pub mod export;
pub mod extract;
pub mod scrapers;
pub mod stats;

pub use core::{Runner, ScrapeConfig, ScraperError, ScraperResult};
pub use export::CsvExporter;
pub use extract::{Extraction, Extractor, StateCount};
pub use scrapers::Scraper;
pub use stats::StatsTracker;
