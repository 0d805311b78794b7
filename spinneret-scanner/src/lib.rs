pub mod crawler;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod links;
pub mod result;

pub use crawler::{Crawler, select_method};
pub use error::CrawlError;
pub use fetch::Fetcher;
pub use graph::CrawlGraph;
pub use links::{extract_links, resolve_link};
pub use result::{CrawlResult, CrawlStatus};

// Request types that appear in `CrawlResult` fields
pub use reqwest::{Method, StatusCode};
pub use url::Url;
