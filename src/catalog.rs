// catalog.rs — Dataset loading and all read operations over the collection.
//
// The collection is loaded once (embedded dataset or a JSON file) and never
// mutated afterwards: one writer at load time, any number of readers after.
// That is why `Catalog` can compute its derived data (stats and the genre
// dropdown options) a single time in the constructor and hand out borrows
// for the rest of the process.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{CatalogStats, CountEntry, MediaRecord, MediaType, Query};
use crate::query::filter_and_sort;

/// The dataset shipped with the binary, same shape as the original
/// directory's `app/data/movies.json`.
const BUILTIN_DATASET: &str = include_str!("../data/movies.json");

/// Sentinel shown at the top of the genre selection control. Only the UI
/// layer ever sees this string; a `Query` models "no genre filter" as
/// `None`, so a genre literally named "All" could never be confused with it.
pub const GENRE_ALL: &str = "All";

/// How many entries `CatalogStats::top_genres` is truncated to.
const TOP_GENRES: usize = 6;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Loading is the only thing that can fail here. Every query operation is
/// total: unknown slugs and empty results are ordinary values, not errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The immutable record collection plus its cached derived data.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MediaRecord>,
    stats: CatalogStats,
    genre_options: Vec<String>,
}

impl Catalog {
    /// Build a catalog from an already-deserialized collection. Derived data
    /// is computed here, once: it depends only on the collection, never on
    /// a query.
    pub fn from_records(records: Vec<MediaRecord>) -> Self {
        let stats = compute_stats(&records);
        let genre_options = distinct_genres(&records);
        debug!(
            total = stats.total,
            movies = stats.movie_count,
            series = stats.series_count,
            genres = genre_options.len() - 1,
            "catalog loaded"
        );
        Catalog {
            records,
            stats,
            genre_options,
        }
    }

    /// Parse a catalog out of dataset JSON (an array of records).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<MediaRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Read and parse a dataset file from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Every record, in dataset order.
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Cached aggregate numbers for the whole collection.
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// Cached options for the genre dropdown: the "All" sentinel followed by
    /// every distinct genre label, sorted ascending.
    pub fn genre_options(&self) -> &[String] {
        &self.genre_options
    }

    /// Run the current query through the filter/sort pipeline.
    pub fn search(&self, query: &Query) -> Vec<&MediaRecord> {
        filter_and_sort(&self.records, query)
    }

    /// Detail-page lookup. `None` means "render the not-found view", it is
    /// not a failure.
    pub fn lookup_by_slug(&self, slug: &str) -> Option<&MediaRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// The type-page listing: every record of one kind, in dataset order.
    pub fn by_type(&self, media_type: MediaType) -> Vec<&MediaRecord> {
        self.records
            .iter()
            .filter(|r| r.media_type() == media_type)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Tally how many records carry each genre label. Entries appear in the
/// order a label is first observed while scanning the collection; that
/// order is what breaks ties in `compute_stats`.
pub fn genre_counts(records: &[MediaRecord]) -> Vec<CountEntry> {
    let mut counts: Vec<CountEntry> = Vec::new();
    for record in records {
        for genre in &record.genre {
            match counts.iter_mut().find(|entry| entry.name == *genre) {
                Some(entry) => entry.count += 1,
                None => counts.push(CountEntry {
                    name: genre.clone(),
                    count: 1,
                }),
            }
        }
    }
    counts
}

/// Aggregate the whole collection: total, per-type counts, and the top
/// genres by frequency (descending, ties kept in first-observed order by the
/// stable sort, truncated to 6).
pub fn compute_stats(records: &[MediaRecord]) -> CatalogStats {
    let movie_count = records
        .iter()
        .filter(|r| r.media_type() == MediaType::Movie)
        .count();
    let series_count = records.len() - movie_count;

    let mut tallies = genre_counts(records);
    tallies.sort_by_key(|entry| std::cmp::Reverse(entry.count));
    let top_genres = tallies
        .into_iter()
        .take(TOP_GENRES)
        .map(|entry| entry.name)
        .collect();

    CatalogStats {
        total: records.len(),
        movie_count,
        series_count,
        top_genres,
    }
}

/// Every unique genre label sorted ascending, with the "All" sentinel
/// prepended for the selection control.
pub fn distinct_genres(records: &[MediaRecord]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for record in records {
        for genre in &record.genre {
            if !genres.iter().any(|g| g == genre) {
                genres.push(genre.clone());
            }
        }
    }
    genres.sort();

    let mut options = Vec::with_capacity(genres.len() + 1);
    options.push(GENRE_ALL.to_string());
    options.extend(genres);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn record(slug: &str, genres: &[&str], kind: MediaKind) -> MediaRecord {
        MediaRecord {
            id: format!("id-{slug}"),
            slug: slug.to_string(),
            title: slug.to_string(),
            year: 2020,
            genre: genres.iter().map(|g| g.to_string()).collect(),
            plot: String::new(),
            poster: String::new(),
            imdb_rating: Some(7.0),
            kind,
            images: vec![],
        }
    }

    #[test]
    fn stats_on_an_empty_collection_are_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.movie_count, 0);
        assert_eq!(stats.series_count, 0);
        assert!(stats.top_genres.is_empty());
    }

    #[test]
    fn stats_count_records_by_type() {
        let records = vec![
            record("a", &["Drama"], MediaKind::Movie),
            record("b", &["Drama"], MediaKind::Series { total_seasons: 2 }),
            record("c", &["Action"], MediaKind::Movie),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.movie_count, 2);
        assert_eq!(stats.series_count, 1);
    }

    #[test]
    fn top_genres_rank_by_frequency_with_first_seen_tie_break() {
        // Action: 3, Drama: 2, Crime/Thriller/History/Sci-Fi/War: 1 each.
        // The five singletons tie; first-observed order decides, and the
        // list is cut to six entries.
        let records = vec![
            record("a", &["Crime", "Action"], MediaKind::Movie),
            record("b", &["Action", "Drama"], MediaKind::Movie),
            record("c", &["Thriller", "Action", "Drama"], MediaKind::Movie),
            record("d", &["History"], MediaKind::Movie),
            record("e", &["Sci-Fi"], MediaKind::Movie),
            record("f", &["War"], MediaKind::Movie),
        ];
        let stats = compute_stats(&records);
        assert_eq!(
            stats.top_genres,
            vec!["Action", "Drama", "Crime", "Thriller", "History", "Sci-Fi"]
        );
    }

    #[test]
    fn genre_options_start_with_the_sentinel_and_hold_sorted_unique_labels() {
        let records = vec![
            record("a", &["Drama", "Crime"], MediaKind::Movie),
            record("b", &["Crime", "Action"], MediaKind::Movie),
        ];
        let options = distinct_genres(&records);
        assert_eq!(options, vec!["All", "Action", "Crime", "Drama"]);
    }

    #[test]
    fn genre_options_on_an_empty_collection_are_just_the_sentinel() {
        assert_eq!(distinct_genres(&[]), vec![GENRE_ALL.to_string()]);
    }

    #[test]
    fn lookup_by_slug_finds_exact_matches_only() {
        let catalog = Catalog::from_records(vec![
            record("breaking-bad", &["Crime"], MediaKind::Series { total_seasons: 5 }),
        ]);
        assert!(catalog.lookup_by_slug("breaking-bad").is_some());
        assert!(catalog.lookup_by_slug("unknown-slug").is_none());
        assert!(catalog.lookup_by_slug("Breaking-Bad").is_none());
    }

    #[test]
    fn by_type_splits_the_collection_in_dataset_order() {
        let catalog = Catalog::from_records(vec![
            record("a", &["Drama"], MediaKind::Movie),
            record("b", &["Drama"], MediaKind::Series { total_seasons: 1 }),
            record("c", &["Drama"], MediaKind::Movie),
        ]);
        let movies: Vec<&str> = catalog
            .by_type(MediaType::Movie)
            .iter()
            .map(|r| r.slug.as_str())
            .collect();
        assert_eq!(movies, vec!["a", "c"]);
        assert_eq!(catalog.by_type(MediaType::Series).len(), 1);
    }

    #[test]
    fn catalog_caches_derived_data_at_construction() {
        let catalog = Catalog::from_records(vec![
            record("a", &["Drama", "Crime"], MediaKind::Movie),
            record("b", &["Drama"], MediaKind::Series { total_seasons: 3 }),
        ]);
        assert_eq!(catalog.stats().total, 2);
        assert_eq!(catalog.stats().top_genres[0], "Drama");
        assert_eq!(catalog.genre_options()[0], GENRE_ALL);
        assert_eq!(catalog.genre_options().len(), 3);
    }

    #[test]
    fn from_json_rejects_malformed_datasets() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
        // A series without a season count is malformed by construction.
        let missing_seasons = r#"[{
            "id": "x", "slug": "x", "title": "X", "year": 2000,
            "genre": ["Drama"], "plot": "", "poster": "",
            "imdbRating": 7.0, "type": "series", "images": []
        }]"#;
        assert!(Catalog::from_json(missing_seasons).is_err());
    }
}
