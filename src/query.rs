// query.rs — The filter / sort pipeline.
//
// Everything here is a pure function over borrowed records: no I/O, no
// mutation of the collection, no shared state. The pipeline runs on every
// user interaction and fully re-derives its result from the current `Query`,
// which is fine at catalog sizes of tens to low thousands of entries.

use crate::models::{MediaRecord, Query, SortKey};

impl Query {
    /// Does one record pass every active filter dimension?
    ///
    /// The four predicates compose with logical AND and are independent of
    /// each other; an inactive dimension (`None`) always passes.
    pub fn matches(&self, record: &MediaRecord) -> bool {
        self.matches_search(record)
            && self.matches_genre(record)
            && self.matches_type(record)
            && self.matches_rating(record)
    }

    /// Case-insensitive substring match on the title. The term is trimmed
    /// first; a term that trims to nothing disables the filter entirely.
    fn matches_search(&self, record: &MediaRecord) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => record
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
        }
    }

    /// Exact, case-sensitive membership test against the record's genre
    /// list. No partial matching: "Sci" does not match "Sci-Fi".
    fn matches_genre(&self, record: &MediaRecord) -> bool {
        match &self.genre {
            None => true,
            Some(genre) => record.genre.iter().any(|g| g == genre),
        }
    }

    fn matches_type(&self, record: &MediaRecord) -> bool {
        match self.media_type {
            None => true,
            Some(media_type) => record.media_type() == media_type,
        }
    }

    /// Rating floor over the effective rating (absent rating counts as 0).
    /// A floor that is not positive is treated the same as no floor, so a
    /// slider resting at 0 never hides unrated records.
    fn matches_rating(&self, record: &MediaRecord) -> bool {
        match self.min_rating {
            None => true,
            Some(min) if min <= 0.0 => true,
            Some(min) => record.effective_rating() >= min,
        }
    }
}

/// Run the full pipeline: apply all four filters, then order the survivors
/// by the query's sort key.
///
/// Filtering is stable (it preserves collection order) and sorting uses a
/// stable sort, so records that compare equal keep their relative order from
/// the input. The input slice is never reordered or mutated; the result is
/// a fresh vector of borrows. An empty result is a normal outcome, not an
/// error.
pub fn filter_and_sort<'a>(records: &'a [MediaRecord], query: &Query) -> Vec<&'a MediaRecord> {
    let mut results: Vec<&MediaRecord> = records.iter().filter(|r| query.matches(r)).collect();

    // f64 keys are compared with total_cmp: ratings are always in [0, 10]
    // so NaN ordering never matters, but total_cmp keeps the comparator
    // well-formed without an unwrap.
    match query.sort {
        SortKey::Default => {}
        SortKey::YearAsc => results.sort_by_key(|r| r.year),
        SortKey::YearDesc => results.sort_by_key(|r| std::cmp::Reverse(r.year)),
        SortKey::RatingAsc => {
            results.sort_by(|a, b| a.effective_rating().total_cmp(&b.effective_rating()))
        }
        SortKey::RatingDesc => {
            results.sort_by(|a, b| b.effective_rating().total_cmp(&a.effective_rating()))
        }
    }

    results
}
