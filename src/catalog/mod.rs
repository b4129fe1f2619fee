//! Aggregate Loader/Cache
//!
//! Owns the in-memory snapshot of the artist API and the lookups over it.
//!
//! ## Architecture
//!
//! - **Catalog**: single-flight, time-bounded snapshot cache
//! - **Clock**: injectable time source used for freshness checks
//! - **Lookups**: `artist_by_id` / `relation_by_id` over the current snapshot
//!
//! A `Catalog` is built once at startup and shared behind an `Arc`.

mod clock;
mod error;
mod loader;
mod lookup;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CatalogError, CatalogResult};
pub use loader::{Catalog, LoaderState, Snapshot, DEFAULT_TTL};
