use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("unexpected status {status} fetching {url}")]
    HttpStatus { status: u16, url: Url },

    #[error("page title {found:?} does not contain {expected:?}")]
    TitleMismatch { expected: String, found: String },

    #[error("invalid selector {selector:?}: {message}")]
    SelectorError { selector: String, message: String },

    #[error("cannot parse restaurant count from {raw:?}")]
    CountParse { raw: String },

    #[error("no state entries matched selector {selector:?}")]
    NoEntries { selector: String },
}

pub type ScraperResult<T> = Result<T, ScraperError>;
