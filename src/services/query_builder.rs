//! Filter composition for the guided questionnaire.
//!
//! `build` is the only place selections turn into a catalog query: it is
//! pure and deterministic, so the whole flow is testable without a network.

use crate::models::{Company, Era, Genre, RatingTier, SubgenreOption, Vibe};

/// Vote-count floor applied when the rating step was skipped
const DEFAULT_MIN_VOTES: &str = "50";

const DEFAULT_SORT: &str = "popularity.desc";

/// The user's answers so far; every field is independently skippable
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSelection {
    pub genre: Option<Genre>,
    pub subgenre: Option<SubgenreOption>,
    pub company: Option<Company>,
    pub era: Option<Era>,
    pub rating: Option<RatingTier>,
    pub vibe: Option<Vibe>,
}

/// A normalized catalog query derived from a `FilterSelection`.
///
/// `genre_ids` is deduplicated and sorted; an empty set means the query
/// degenerates to the trending feed rather than an unconstrained discover.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryQuery {
    pub genre_ids: Vec<u64>,
    pub sort_by: &'static str,
    pub keyword_filter: Option<&'static str>,
    pub release_date_min: Option<&'static str>,
    pub release_date_max: Option<&'static str>,
    pub min_rating: Option<&'static str>,
    pub min_votes: &'static str,
}

impl DiscoveryQuery {
    /// True when no genre constraint survived and trending is fetched instead
    pub fn is_unfiltered(&self) -> bool {
        self.genre_ids.is_empty()
    }

    /// Renders the non-genre constraints as untyped query-string pairs
    pub fn extra_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(keywords) = self.keyword_filter {
            params.push(("with_keywords".to_string(), keywords.to_string()));
        }
        if let Some(min) = self.release_date_min {
            params.push(("primary_release_date.gte".to_string(), min.to_string()));
        }
        if let Some(max) = self.release_date_max {
            params.push(("primary_release_date.lte".to_string(), max.to_string()));
        }
        if let Some(rating) = self.min_rating {
            params.push(("vote_average.gte".to_string(), rating.to_string()));
        }
        params.push(("vote_count.gte".to_string(), self.min_votes.to_string()));

        params
    }
}

/// Composes a query from the accumulated answers.
///
/// Genre ids accumulate from the genre, subgenre, and company picks; the
/// keyword filter has exactly one contributor (the subgenre).
pub fn build(selection: &FilterSelection) -> DiscoveryQuery {
    let mut genre_ids: Vec<u64> = Vec::new();

    if let Some(genre) = selection.genre {
        genre_ids.push(genre.tmdb_id());
    }
    if let Some(subgenre) = selection.subgenre {
        genre_ids.extend_from_slice(subgenre.extra_genre_ids);
    }
    if let Some(company) = selection.company {
        genre_ids.extend_from_slice(company.extra_genre_ids());
    }

    genre_ids.sort_unstable();
    genre_ids.dedup();

    let keyword_filter = selection
        .subgenre
        .map(|s| s.keyword_filter)
        .filter(|k| !k.is_empty());

    DiscoveryQuery {
        genre_ids,
        sort_by: selection.vibe.map_or(DEFAULT_SORT, Vibe::sort_by),
        keyword_filter,
        release_date_min: selection.era.and_then(Era::min_date),
        release_date_max: selection.era.and_then(Era::max_date),
        min_rating: selection.rating.map(RatingTier::min_rating),
        min_votes: selection
            .rating
            .map_or(DEFAULT_MIN_VOTES, RatingTier::min_votes),
    }
}
