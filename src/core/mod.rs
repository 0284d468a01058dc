mod config;
mod errors;
mod runner;

pub use config::ScrapeConfig;
pub use errors::{ScraperError, ScraperResult};
pub use runner::Runner;
