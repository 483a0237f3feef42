//! Catalog Query Service
//!
//! Translates UI-level search parameters into remote API requests, executes
//! them through the response cache, normalizes the wire schema, and exposes
//! observable result/error/loading state through a watch channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, RwLock};
use tracing::debug;

use crate::cache::ResponseCache;
use crate::catalog::query::{self, SearchParams};
use crate::config::Config;
use crate::error::{GalleryError, Result};
use crate::models::{
    AgentResponse, ArtistInfo, ArtworkDetail, ArtworkSummary, DetailResponse, ListResponse,
    SearchResponse,
};

/// Curated artwork ids shown on the home screen.
const FEATURED_IDS: [i64; 12] = [
    27992, 28560, 14598, 111628, 6565, 16568, 20684, 87479, 129884, 24306, 28067, 25865,
];

// == Catalog State ==
/// Observable query state.
///
/// Each query method sets `loading`, clears `error`, and on completion
/// either updates its result fields or stores a human-readable error.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Current result page
    pub results: Vec<ArtworkSummary>,
    /// Curated artworks, best-effort
    pub featured: Vec<ArtworkSummary>,
    /// Currently loaded detail record
    pub detail: Option<ArtworkDetail>,
    /// Total matches reported by the last search
    pub total_results: u64,
    /// True while a query is in flight
    pub loading: bool,
    /// Human-readable message for the last transport failure
    pub error: Option<String>,
}

// == Catalog Service ==
/// Client-side query service for the remote art catalog.
///
/// All reads go through the shared [`ResponseCache`]; only GETs under the
/// configured API base are cache-eligible. Concurrent misses on the same
/// URL are not de-duplicated: both callers fetch and the last write wins.
pub struct CatalogService {
    /// HTTP client
    http: reqwest::Client,
    /// Client configuration
    config: Config,
    /// Shared response cache
    cache: Arc<RwLock<ResponseCache>>,
    /// Observable state channel
    state_tx: watch::Sender<CatalogState>,
    /// Latest generation issued for results-mutating requests
    results_gen: AtomicU64,
    /// Latest generation issued for detail requests
    detail_gen: AtomicU64,
}

impl CatalogService {
    // == Constructor ==
    /// Creates a new CatalogService with its own response cache sized from
    /// the configuration.
    pub fn new(config: Config) -> Self {
        let cache = ResponseCache::new(config.max_cache_entries, config.cache_ttl);
        let (state_tx, _) = watch::channel(CatalogState::default());

        Self {
            http: reqwest::Client::new(),
            config,
            cache: Arc::new(RwLock::new(cache)),
            state_tx,
            results_gen: AtomicU64::new(0),
            detail_gen: AtomicU64::new(0),
        }
    }

    // == State Access ==
    /// Returns a snapshot of the current query state.
    pub fn state(&self) -> CatalogState {
        self.state_tx.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state_tx.subscribe()
    }

    /// Returns the shared response cache, e.g. for the background sweep task.
    pub fn cache(&self) -> Arc<RwLock<ResponseCache>> {
        self.cache.clone()
    }

    /// Builds an IIIF image URL for the given image id.
    pub fn iiif_url(&self, image_id: &str, width: Option<u32>) -> String {
        query::iiif_url(&self.config.iiif_base, image_id, width)
    }

    // == Search ==
    /// Runs a search and updates `results` and `total_results`.
    ///
    /// Transport failures surface as a non-null `error` with loading
    /// cleared. A response that arrives after a newer results request has
    /// been issued is dropped instead of overwriting the newer state.
    pub async fn search(&self, params: &SearchParams) {
        let generation = issue(&self.results_gen);
        self.state_tx.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let url = query::search_url(&self.config.api_base, params);
        match self.fetch_search(&url).await {
            Ok((results, total)) => {
                if !is_current(&self.results_gen, generation) {
                    debug!(url, "dropping stale search response");
                    return;
                }
                self.state_tx.send_modify(|s| {
                    s.results = results;
                    s.total_results = total;
                    s.loading = false;
                });
            }
            Err(err) => {
                if !is_current(&self.results_gen, generation) {
                    return;
                }
                self.state_tx.send_modify(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                });
            }
        }
    }

    /// Convenience wrapper: search restricted to one department.
    pub async fn load_by_department(&self, department: &str, page: u32, limit: u32) {
        let params = SearchParams {
            department: Some(department.to_string()),
            page,
            limit,
            ..Default::default()
        };
        self.search(&params).await;
    }

    // == Detail ==
    /// Fetches one record by id with the extended field list.
    pub async fn get_detail(&self, id: i64) {
        let generation = issue(&self.detail_gen);
        self.state_tx.send_modify(|s| {
            s.loading = true;
            s.error = None;
            s.detail = None;
        });

        let url = query::detail_url(&self.config.api_base, id);
        let outcome: Result<ArtworkDetail> = async {
            let body = self.cached_get(&url).await?;
            let res: DetailResponse = serde_json::from_str(&body)?;
            Ok(ArtworkDetail::from(res.data))
        }
        .await;

        if !is_current(&self.detail_gen, generation) {
            debug!(url, "dropping stale detail response");
            return;
        }
        match outcome {
            Ok(detail) => self.state_tx.send_modify(|s| {
                s.detail = Some(detail);
                s.loading = false;
            }),
            Err(err) => self.state_tx.send_modify(|s| {
                s.error = Some(err.to_string());
                s.loading = false;
            }),
        }
    }

    // == Featured ==
    /// Loads the curated featured set. Best-effort decoration: failures are
    /// silent and the state simply stays empty.
    pub async fn load_featured(&self) {
        let url = query::batch_url(&self.config.api_base, &FEATURED_IDS);
        match self.fetch_list(&url).await {
            Ok(featured) => self.state_tx.send_modify(|s| s.featured = featured),
            Err(err) => debug!(error = %err, "featured load failed"),
        }
    }

    // == Batch By Ids ==
    /// Loads an unordered batch of artworks by id into `results`.
    ///
    /// An empty id list short-circuits to an empty result set without
    /// issuing a network call or touching `loading`/`error`.
    pub async fn load_artworks_by_ids(&self, ids: &[i64]) {
        if ids.is_empty() {
            self.state_tx.send_modify(|s| s.results = Vec::new());
            return;
        }

        let generation = issue(&self.results_gen);
        self.state_tx.send_modify(|s| s.loading = true);

        let url = query::batch_url(&self.config.api_base, ids);
        match self.fetch_list(&url).await {
            Ok(results) => {
                if !is_current(&self.results_gen, generation) {
                    return;
                }
                self.state_tx.send_modify(|s| {
                    s.results = results;
                    s.loading = false;
                });
            }
            Err(err) => {
                if !is_current(&self.results_gen, generation) {
                    return;
                }
                self.state_tx.send_modify(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                });
            }
        }
    }

    // == Artist Lookup ==
    /// Fetches one agent (artist) record.
    pub async fn artist(&self, id: i64) -> Result<ArtistInfo> {
        let url = query::agent_url(&self.config.api_base, id);
        let body = self.cached_get(&url).await?;
        let res: AgentResponse = serde_json::from_str(&body)?;
        Ok(ArtistInfo::from(res.data))
    }

    /// Fetches public-domain works by one artist.
    pub async fn artist_works(&self, artist_id: i64) -> Result<Vec<ArtworkSummary>> {
        let url = query::artist_works_url(&self.config.api_base, artist_id);
        let body = self.cached_get(&url).await?;
        let res: SearchResponse = serde_json::from_str(&body)?;
        Ok(res.data.into_iter().map(Into::into).collect())
    }

    // == Fetch Helpers ==

    async fn fetch_search(&self, url: &str) -> Result<(Vec<ArtworkSummary>, u64)> {
        let body = self.cached_get(url).await?;
        let res: SearchResponse = serde_json::from_str(&body)?;
        let total = res.pagination.total;
        Ok((res.data.into_iter().map(Into::into).collect(), total))
    }

    async fn fetch_list(&self, url: &str) -> Result<Vec<ArtworkSummary>> {
        let body = self.cached_get(url).await?;
        let res: ListResponse = serde_json::from_str(&body)?;
        Ok(res.data.into_iter().map(Into::into).collect())
    }

    /// Executes a GET through the response cache.
    ///
    /// Only URLs under the configured catalog API base are cache-eligible;
    /// everything else bypasses the cache entirely.
    async fn cached_get(&self, url: &str) -> Result<String> {
        let cacheable = url.starts_with(&self.config.api_base);

        if cacheable {
            if let Some(body) = self.cache.write().await.get(url) {
                return Ok(body);
            }
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;

        if cacheable {
            self.cache.write().await.put(url.to_string(), body.clone());
        }

        Ok(body)
    }
}

// == Generation Guard ==
// Requests are tagged with a monotonically increasing generation per
// logical operation; a response is applied only if its generation is still
// the latest issued, so an older response cannot overwrite newer state.

fn issue(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

fn is_current(counter: &AtomicU64, generation: u64) -> bool {
    counter.load(Ordering::SeqCst) == generation
}
