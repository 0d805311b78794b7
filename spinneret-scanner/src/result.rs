use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// How a fetch attempt ended. Every address in a finished crawl carries
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrawlStatus {
    /// The server answered with a success status code.
    Success,
    /// The server answered with a non-success status code.
    Error,
    /// The request exceeded its timeout.
    Canceled,
    /// The request failed before a response arrived (DNS, refused
    /// connection, protocol error).
    Failure,
}

impl CrawlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlStatus::Success => "Success",
            CrawlStatus::Error => "Error",
            CrawlStatus::Canceled => "Canceled",
            CrawlStatus::Failure => "Failure",
        }
    }
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recorded outcome of one fetched address.
///
/// `status_code` carries the wire status for Success and Error outcomes;
/// Canceled pins it to 408 and Failure to 400, where no response existed.
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlResult {
    pub url: Url,
    pub method: Method,
    pub status: CrawlStatus,
    pub status_code: StatusCode,
    pub error: Option<String>,
}

impl CrawlResult {
    pub fn new(url: Url, method: Method, status: CrawlStatus, status_code: StatusCode) -> Self {
        Self {
            url,
            method,
            status,
            status_code,
            error: None,
        }
    }

    pub fn with_error(
        url: Url,
        method: Method,
        status: CrawlStatus,
        status_code: StatusCode,
        error: String,
    ) -> Self {
        Self {
            url,
            method,
            status,
            status_code,
            error: Some(error),
        }
    }
}
