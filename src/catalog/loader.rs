//! Aggregate loader and snapshot cache
//!
//! Keeps one immutable [`Snapshot`] of the four upstream resources and
//! refreshes it when it gets older than the freshness window.
//!
//! ## Refresh rules
//!
//! - A fresh snapshot is returned without any network traffic.
//! - Concurrent cache misses share a single refresh (single-flight). The
//!   in-flight marker lives under the same lock as the cache entry.
//! - The four resources are fetched concurrently and joined. If any of
//!   them fails the whole refresh fails and the previous entry is kept.
//! - A refresh runs in its own task, so it completes even if every
//!   caller waiting on it goes away.

use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::error::{CatalogError, CatalogResult};
use crate::upstream::{
    Artist, DateIndex, LocationIndex, RelationIndex, Resource, UpstreamClient, UpstreamError,
};

/// How long a snapshot is served before the next caller refreshes it
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// One complete, internally consistent copy of the upstream dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub artists: Vec<Artist>,
    pub locations: LocationIndex,
    pub dates: DateIndex,
    pub relations: RelationIndex,
}

/// Loader lifecycle. Never returns to `Empty` once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Empty,
    Loading,
    Ready,
}

impl LoaderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderState::Empty => "empty",
            LoaderState::Loading => "loading",
            LoaderState::Ready => "ready",
        }
    }
}

type RefreshFuture = Shared<BoxFuture<'static, CatalogResult<Arc<Snapshot>>>>;

struct CacheEntry {
    snapshot: Arc<Snapshot>,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    entry: Option<CacheEntry>,
    in_flight: Option<RefreshFuture>,
}

/// Owned, shareable snapshot cache over the artist API
pub struct Catalog {
    inner: Arc<Inner>,
}

struct Inner {
    client: UpstreamClient,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    state: RwLock<CacheState>,
}

impl Catalog {
    /// Catalog with the system clock and the default freshness window
    pub fn new(client: UpstreamClient) -> Self {
        Self::with_clock(client, Arc::new(SystemClock), DEFAULT_TTL)
    }

    pub fn with_clock(client: UpstreamClient, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                clock,
                ttl,
                state: RwLock::new(CacheState::default()),
            }),
        }
    }

    /// Freshness window
    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    pub fn state(&self) -> LoaderState {
        let state = self.inner.read_state();
        if state.in_flight.is_some() {
            LoaderState::Loading
        } else if state.entry.is_some() {
            LoaderState::Ready
        } else {
            LoaderState::Empty
        }
    }

    /// The published snapshot, fresh or not, without triggering a refresh
    pub fn cached(&self) -> Option<Arc<Snapshot>> {
        self.inner
            .read_state()
            .entry
            .as_ref()
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    /// Current snapshot, refreshing it from upstream if it is missing or stale
    pub async fn snapshot(&self) -> CatalogResult<Arc<Snapshot>> {
        let cached = {
            let state = self.inner.read_state();
            self.inner.fresh(&state)
        };
        if let Some(snapshot) = cached {
            tracing::trace!("Catalog cache hit");
            return Ok(snapshot);
        }

        let refresh = {
            let mut state = self.inner.write_state();

            // Another caller may have published while we waited for the lock
            if let Some(snapshot) = self.inner.fresh(&state) {
                return Ok(snapshot);
            }

            match &state.in_flight {
                Some(refresh) => {
                    tracing::debug!("Joining in-flight catalog refresh");
                    refresh.clone()
                }
                None => {
                    let refresh = Inner::start_refresh(&self.inner);
                    state.in_flight = Some(refresh.clone());
                    refresh
                }
            }
        };

        refresh.await
    }
}

impl Inner {
    fn read_state(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn fresh(&self, state: &CacheState) -> Option<Arc<Snapshot>> {
        let entry = state.entry.as_ref()?;
        let age = self.clock.now().saturating_duration_since(entry.fetched_at);
        (age < self.ttl).then(|| Arc::clone(&entry.snapshot))
    }

    /// Spawn the refresh task and wrap its handle in a shareable future.
    ///
    /// Must be called with the write lock held so the marker is stored
    /// before the task can clear it.
    fn start_refresh(inner: &Arc<Self>) -> RefreshFuture {
        let task = tokio::spawn({
            let inner = Arc::clone(inner);
            async move { inner.refresh().await }
        });

        let inner = Arc::clone(inner);
        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    inner.write_state().in_flight = None;
                    Err(CatalogError::Internal(format!(
                        "Catalog refresh task failed: {}",
                        e
                    )))
                }
            }
        }
        .boxed()
        .shared()
    }

    async fn refresh(&self) -> CatalogResult<Arc<Snapshot>> {
        tracing::info!(base_url = self.client.base_url(), "Refreshing catalog");
        let started = Instant::now();

        let result = self.fetch_all().await;

        let mut state = self.write_state();
        state.in_flight = None;

        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                state.entry = Some(CacheEntry {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at: self.clock.now(),
                });

                tracing::info!(
                    artists = snapshot.artists.len(),
                    relations = snapshot.relations.index.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Catalog refreshed"
                );
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    keeping_previous = state.entry.is_some(),
                    "Catalog refresh failed"
                );
                Err(e)
            }
        }
    }

    /// Fetch all four resources concurrently and wait for every one of them.
    ///
    /// When several fetches fail, the reported error is picked by resource
    /// order (artists, locations, dates, relations), not by which failure
    /// completed first.
    async fn fetch_all(&self) -> CatalogResult<Snapshot> {
        let (artists, locations, dates, relations) = tokio::join!(
            self.client.artists(),
            self.client.locations(),
            self.client.dates(),
            self.client.relations(),
        );

        let upstream = |resource: Resource| {
            move |source: UpstreamError| CatalogError::Upstream { resource, source }
        };

        Ok(Snapshot {
            artists: artists.map_err(upstream(Resource::Artists))?,
            locations: locations.map_err(upstream(Resource::Locations))?,
            dates: dates.map_err(upstream(Resource::Dates))?,
            relations: relations.map_err(upstream(Resource::Relations))?,
        })
    }
}
