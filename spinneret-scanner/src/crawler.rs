use crate::error::{CrawlError, Result};
use crate::fetch::{Fetcher, read_text_body};
use crate::graph::CrawlGraph;
use crate::links::{extract_links, resolve_link};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Method;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

/// Extensions that mark a link as a static asset, probed with HEAD
/// instead of downloaded. Matched case-sensitively against the final
/// path segment's extension.
const STATIC_ASSET_EXTENSIONS: [&str; 10] = [
    "css", "gif", "ico", "jpg", "jpeg", "js", "pdf", "png", "svg", "xml",
];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_CONNECTIONS_PER_HOST: usize = 10;

/// Recursive site crawler. Starting from a seed URL it follows every
/// link on the same host, probing cross-host links and static assets
/// with HEAD along the way, and collects one outcome per unique address
/// into a [`CrawlGraph`].
pub struct Crawler {
    fetcher: Fetcher,
}

impl Crawler {
    pub fn new() -> Result<Self> {
        Self::with_limits(DEFAULT_TIMEOUT, DEFAULT_MAX_CONNECTIONS_PER_HOST)
    }

    pub fn with_limits(timeout: Duration, max_connections_per_host: usize) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(timeout, max_connections_per_host)?,
        })
    }

    /// Crawls everything reachable from the seed and returns the graph
    /// of outcomes. The future completes only once every spawned fetch
    /// has finished, so the returned graph has no pending claims left.
    pub async fn crawl(&self, seed: &str) -> Result<CrawlGraph> {
        let origin =
            Url::parse(seed).map_err(|e| CrawlError::InvalidSeed(format!("{}: {}", seed, e)))?;
        let graph = CrawlGraph::new();

        info!("Starting crawl of {}", origin);

        let walk = Arc::new(Walk {
            fetcher: self.fetcher.clone(),
            origin: origin.clone(),
            graph: graph.clone(),
        });
        walk.visit(origin).await;

        info!("Crawl complete. Visited {} address(es)", graph.len());
        Ok(graph)
    }
}

/// Shared state for one crawl, cloned into every spawned visit task.
struct Walk {
    fetcher: Fetcher,
    origin: Url,
    graph: CrawlGraph,
}

impl Walk {
    /// Visits a single address and recursively spawns a task per link
    /// found on it. Boxed because the recursion would otherwise give the
    /// future an infinite size.
    fn visit(self: Arc<Self>, url: Url) -> BoxFuture<'static, ()> {
        async move {
            if !matches!(url.scheme(), "http" | "https") {
                debug!("Skipping non-web link {}", url);
                return;
            }
            if !self.graph.claim(&url) {
                return;
            }

            let method = select_method(&self.origin, &url);
            if method == Method::HEAD {
                let (result, _) = self.fetcher.send(&url, Method::HEAD).await;
                self.graph.record(result);
                return;
            }

            let (result, response) = self.fetcher.send(&url, Method::GET).await;
            self.graph.record(result);

            let Some(response) = response else { return };
            let Some(body) = read_text_body(response).await else {
                return;
            };

            let mut children = JoinSet::new();
            for link in extract_links(&body) {
                // Relative links resolve against the crawl origin, not
                // the page that carried them.
                if let Some(target) = resolve_link(&self.origin, &link) {
                    children.spawn(Arc::clone(&self).visit(target));
                }
            }
            while let Some(joined) = children.join_next().await {
                if let Err(e) = joined {
                    warn!("Crawl task failed: {}", e);
                }
            }
        }
        .boxed()
    }
}

/// Picks the probe method for a link: HEAD for anything on another host
/// or for same-host static assets, GET for everything else. Hosts are
/// compared by name alone, so two ports on one host count as the same
/// site.
pub fn select_method(origin: &Url, url: &Url) -> Method {
    if origin.host_str() != url.host_str() {
        return Method::HEAD;
    }

    // A path ending in a slash names a directory, which has no extension.
    let is_static_asset = !url.path().ends_with('/')
        && Path::new(url.path())
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| STATIC_ASSET_EXTENSIONS.contains(&ext));

    if is_static_asset { Method::HEAD } else { Method::GET }
}
