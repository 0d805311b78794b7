use crate::result::CrawlResult;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use url::Url;

/// Concurrent ledger of every address a crawl has seen.
///
/// Each entry is either claimed (fetch in flight, no outcome yet) or
/// resolved with its recorded [`CrawlResult`]. Claiming goes through the
/// sharded map's entry API, so it is an atomic test-and-set per address:
/// however many tasks discover the same link at the same time, exactly one
/// of them gets to fetch it. Entries are never removed; the graph only
/// grows until the crawl finishes and hands it to the caller.
///
/// Cloning is cheap and shares the underlying map, which is how the graph
/// travels into every spawned crawl task.
#[derive(Debug, Clone, Default)]
pub struct CrawlGraph {
    entries: Arc<DashMap<Url, Option<CrawlResult>>>,
}

impl CrawlGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims an address for fetching. The first caller wins and gets
    /// `true`; every later claim of the same address returns `false` and
    /// has no effect, regardless of interleaving.
    pub fn claim(&self, url: &Url) -> bool {
        match self.entries.entry(url.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(None);
                true
            }
        }
    }

    /// Records the outcome for a claimed address. Returns `false` when the
    /// address was never claimed or already has an outcome; the first
    /// recorded outcome is never overwritten.
    pub fn record(&self, result: CrawlResult) -> bool {
        match self.entries.get_mut(&result.url) {
            Some(mut slot) if slot.is_none() => {
                *slot = Some(result);
                true
            }
            _ => false,
        }
    }

    /// Whether the address has been claimed, in either state.
    pub fn contains(&self, url: &Url) -> bool {
        self.entries.contains_key(url)
    }

    /// The recorded outcome for an address, if one has been recorded.
    pub fn get(&self, url: &Url) -> Option<CrawlResult> {
        self.entries.get(url).and_then(|slot| slot.clone())
    }

    /// Snapshot of all recorded outcomes, in no particular order.
    pub fn results(&self) -> Vec<CrawlResult> {
        self.entries
            .iter()
            .filter_map(|entry| entry.value().clone())
            .collect()
    }

    /// Addresses that were claimed but never resolved. Empty once a crawl
    /// has run to completion.
    pub fn unresolved(&self) -> Vec<Url> {
        self.entries
            .iter()
            .filter(|entry| entry.value().is_none())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of claimed addresses, resolved or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
