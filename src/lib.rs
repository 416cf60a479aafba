//! MovieDex — a browsable directory of movies and TV series.
//!
//! The heart of the crate is the catalog query engine: a pure, synchronous
//! filter/sort pipeline over a small immutable collection of records, plus
//! aggregate statistics derived once at load time. There is no storage, no
//! network, and no background work: every operation is a plain function
//! over in-memory data, driven by whatever front-end holds the current
//! [`models::Query`] (the bundled terminal UI lives in the binary).
//!
//!   - [`models`]: record, query, and stats types
//!   - [`query`]: the filter/sort pipeline
//!   - [`catalog`]: dataset loading, lookups, and aggregation

pub mod catalog;
pub mod models;
pub mod query;

pub use catalog::{
    compute_stats, distinct_genres, genre_counts, Catalog, CatalogError, GENRE_ALL,
};
pub use models::{
    CatalogStats, CountEntry, MediaKind, MediaRecord, MediaType, Query, SortKey,
};
pub use query::filter_and_sort;
