use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

/// Runs of slashes collapse to one, except the run that follows a scheme
/// separator, so `https://a.test//x` keeps its authority marker.
static DOUBLED_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^:])/{2,}").unwrap());

/// Pulls every candidate link out of an HTML document: anchor and link
/// `href`s plus script `src`s, deduplicated, in document order.
pub fn extract_links(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for (selector, attribute) in [
        ("a[href]", "href"),
        ("link[href]", "href"),
        ("script[src]", "src"),
    ] {
        for element in document.select(&Selector::parse(selector).unwrap()) {
            if let Some(target) = element.value().attr(attribute)
                && seen.insert(target.to_string())
            {
                links.push(target.to_string());
            }
        }
    }

    links
}

/// Resolves a raw link against the crawl origin into an absolute URL.
///
/// Bare fragment links are self-references and yield `None`. Doubled
/// slashes in the raw text are collapsed before resolution, and any
/// fragment is stripped from the result so `/page` and `/page#section`
/// land on the same address. Unresolvable links are logged and dropped.
pub fn resolve_link(origin: &Url, raw: &str) -> Option<Url> {
    if raw == "#" {
        return None;
    }

    let cleaned = DOUBLED_SLASHES.replace_all(raw, "${1}/");
    match origin.join(&cleaned) {
        Ok(mut url) => {
            url.set_fragment(None);
            Some(url)
        }
        Err(e) => {
            warn!("Unable to resolve link {}: {}", raw, e);
            None
        }
    }
}
