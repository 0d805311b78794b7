use crate::error::Result;
use crate::result::{CrawlResult, CrawlStatus};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = "Spinneret/0.1";

/// HTTP front end for the crawler. Wraps a single shared [`Client`] so
/// every request in a crawl reuses one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher with the given per-request timeout and idle
    /// connection cap per host. The timeout covers both connection
    /// establishment and the full request.
    pub fn new(timeout: Duration, max_connections_per_host: usize) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .pool_max_idle_per_host(max_connections_per_host)
            .build()?;

        Ok(Self { client })
    }

    /// Sends a single request and classifies whatever came back.
    ///
    /// Every call yields a [`CrawlResult`]; the [`Response`] rides along
    /// only for 2xx answers, so callers can read the body of a page that
    /// actually succeeded. Timeouts are reported as canceled with a 408,
    /// all other transport errors as failures with a 400.
    pub async fn send(&self, url: &Url, method: Method) -> (CrawlResult, Option<Response>) {
        debug!("{} {}", method, url);

        match self.client.request(method.clone(), url.clone()).send().await {
            Ok(response) => {
                let status_code = response.status();
                if status_code.is_success() {
                    info!("{} {} -> {}", method, url, status_code);
                    (
                        CrawlResult::new(url.clone(), method, CrawlStatus::Success, status_code),
                        Some(response),
                    )
                } else {
                    warn!("{} {} -> {}", method, url, status_code);
                    (
                        CrawlResult::with_error(
                            url.clone(),
                            method,
                            CrawlStatus::Error,
                            status_code,
                            format!("Error obtaining response: {}", status_code),
                        ),
                        None,
                    )
                }
            }
            Err(e) if e.is_timeout() => {
                warn!("{} {} timed out", method, url);
                (
                    CrawlResult::with_error(
                        url.clone(),
                        method,
                        CrawlStatus::Canceled,
                        StatusCode::REQUEST_TIMEOUT,
                        "Request timed out".to_string(),
                    ),
                    None,
                )
            }
            Err(e) => {
                warn!("{} {} failed: {}", method, url, e);
                (
                    CrawlResult::with_error(
                        url.clone(),
                        method,
                        CrawlStatus::Failure,
                        StatusCode::BAD_REQUEST,
                        error_chain(&e),
                    ),
                    None,
                )
            }
        }
    }
}

/// Reads the body of a response whose content type declares text.
/// Anything else, including responses with no content type at all, is
/// not worth parsing for links and yields `None`.
pub async fn read_text_body(response: Response) -> Option<String> {
    let is_text = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with("text"))
        .unwrap_or(false);

    if !is_text {
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("Unable to read response body: {}", e);
            None
        }
    }
}

fn error_chain(e: &reqwest::Error) -> String {
    use std::error::Error;

    let mut chain = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
