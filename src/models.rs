// models.rs — All data types for MovieDex.
//
// `Serialize / Deserialize` (from serde) keep these structs compatible with
// the JSON dataset shape the catalog is loaded from, and let the CLI emit
// records as JSON. `Debug` is for logging, `Clone` for owned copies where a
// caller needs one.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What kind of entry a record is, including the data that only makes sense
/// for that kind. A series always carries its season count; a movie never
/// does. The relationship is checked by the type system instead of an
/// optional field next to a string discriminator.
///
/// Serialized internally tagged (`"type": "movie" | "series"`) so the JSON
/// shape matches the dataset:
///   { "type": "movie", ... }
///   { "type": "series", "totalSeasons": 5, ... }
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series {
        #[serde(rename = "totalSeasons")]
        total_seasons: u32,
    },
}

impl MediaKind {
    /// The payload-free discriminant, for filtering and routing.
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaKind::Movie => MediaType::Movie,
            MediaKind::Series { .. } => MediaType::Series,
        }
    }

    /// Season count: `Some` for series, `None` for movies.
    pub fn total_seasons(&self) -> Option<u32> {
        match self {
            MediaKind::Movie => None,
            MediaKind::Series { total_seasons } => Some(*total_seasons),
        }
    }
}

/// The two catalog entry types, without per-kind payload. Used as the value
/// of the type filter and of the `/type/{type}` style route parameter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
        }
    }
}

/// Route parameters are validated at the edge: anything but `movie` or
/// `series` is rejected before it reaches the catalog.
#[derive(Debug, thiserror::Error)]
#[error("invalid media type `{0}`, expected `movie` or `series`")]
pub struct InvalidMediaType(pub String);

impl std::str::FromStr for MediaType {
    type Err = InvalidMediaType;

    /// Accepts exactly `movie` / `series`, case-insensitively (route values
    /// are lowercased before matching, same as the original pages did).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "series" => Ok(MediaType::Series),
            _ => Err(InvalidMediaType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Core catalog record
// ---------------------------------------------------------------------------

/// One catalog entry, either a movie or a series.
///
/// `id` and `slug` are each unique across the collection; `slug` is the
/// lowercase URL-safe identifier detail pages look records up by. `genre`
/// keeps the dataset's insertion order, which carries no meaning for
/// filtering. `imdb_rating` is `None` when no rating is available; there is
/// no sentinel value like -1 in the data.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MediaRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub plot: String,
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<f64>,
    #[serde(flatten)]
    pub kind: MediaKind,
    #[serde(default)]
    pub images: Vec<String>,
}

impl MediaRecord {
    /// Rating used for comparisons: the IMDb rating if present, else 0.
    /// Purely a read-side substitution; the record itself is never changed.
    pub fn effective_rating(&self) -> f64 {
        self.imdb_rating.unwrap_or(0.0)
    }

    pub fn media_type(&self) -> MediaType {
        self.kind.media_type()
    }
}

// ---------------------------------------------------------------------------
// Query — the current filter / sort request
// ---------------------------------------------------------------------------

/// What the user is currently asking for. Every filter dimension is an
/// `Option`: `None` means "this dimension is inactive". That keeps "no genre
/// filter" distinct from "filter by a genre literally named All"; the "All"
/// string only exists in the UI control, never in here.
///
/// A `Query` is transient UI state: rebuilt from scratch on every
/// interaction, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Query {
    /// Case-insensitive title substring; surrounding whitespace is ignored,
    /// and an empty or whitespace-only term disables the filter.
    pub search: Option<String>,
    /// Exact genre label (case-sensitive membership test).
    pub genre: Option<String>,
    /// Keep only movies, or only series.
    pub media_type: Option<MediaType>,
    /// Minimum effective rating. A floor of 0 admits everything, including
    /// unrated records, same as no floor at all.
    pub min_rating: Option<f64>,
    pub sort: SortKey,
}

/// Result ordering. `Default` keeps the collection order that filtering
/// preserved.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    YearAsc,
    YearDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Default => "default",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid sort key `{0}`, expected one of: default, year-asc, year-desc, rating-asc, rating-desc")]
pub struct InvalidSortKey(pub String);

impl std::str::FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "year-asc" => Ok(SortKey::YearAsc),
            "year-desc" => Ok(SortKey::YearDesc),
            "rating-asc" => Ok(SortKey::RatingAsc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            _ => Err(InvalidSortKey(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats / dashboard
// ---------------------------------------------------------------------------

/// Aggregate numbers for the hero section of the directory. Derived from the
/// full collection only (the current query never affects them), so they are
/// computed once at load time and cached for the life of the process.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub movie_count: usize,
    pub series_count: usize,
    /// Genre labels ranked by how many records carry them, most frequent
    /// first, ties broken by first appearance in the collection. At most 6.
    pub top_genres: Vec<String>,
}

/// A generic name → count pair used for tallies.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_round_trips_through_the_dataset_shape() {
        let json = r#"{
            "id": "tt0903747",
            "slug": "breaking-bad",
            "title": "Breaking Bad",
            "year": 2008,
            "genre": ["Crime", "Drama", "Thriller"],
            "plot": "A chemistry teacher turns to manufacturing methamphetamine.",
            "poster": "https://example.com/breaking-bad.jpg",
            "imdbRating": 9.5,
            "type": "series",
            "totalSeasons": 5,
            "images": []
        }"#;
        let record: MediaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.media_type(), MediaType::Series);
        assert_eq!(record.kind.total_seasons(), Some(5));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "series");
        assert_eq!(back["totalSeasons"], 5);
    }

    #[test]
    fn movie_has_no_seasons_field() {
        let json = r#"{
            "id": "tt0499549",
            "slug": "avatar",
            "title": "Avatar",
            "year": 2009,
            "genre": ["Action"],
            "plot": "",
            "poster": "",
            "imdbRating": null,
            "type": "movie",
            "images": []
        }"#;
        let record: MediaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, MediaKind::Movie);
        assert_eq!(record.kind.total_seasons(), None);
        assert_eq!(record.imdb_rating, None);
        assert_eq!(record.effective_rating(), 0.0);

        let back = serde_json::to_value(&record).unwrap();
        assert!(back.get("totalSeasons").is_none());
    }

    #[test]
    fn media_type_parses_route_values() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("SERIES".parse::<MediaType>().unwrap(), MediaType::Series);
        assert!("documentary".parse::<MediaType>().is_err());
    }

    #[test]
    fn sort_key_parses_the_wire_strings() {
        assert_eq!("year-desc".parse::<SortKey>().unwrap(), SortKey::YearDesc);
        assert_eq!(SortKey::RatingAsc.as_str(), "rating-asc");
        assert!("title-asc".parse::<SortKey>().is_err());
    }
}
