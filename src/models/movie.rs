use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Genre;

/// A catalog item resolved into the app's internal shape.
///
/// Immutable once constructed. Identity for deduplication is the TMDB id
/// when both sides carry one, otherwise the (title, year) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Local synthetic identifier
    pub id: Uuid,
    /// External catalog identifier, absent for locally-seeded items
    pub tmdb_id: Option<u64>,
    pub title: String,
    pub year: i32,
    pub genres: Vec<Genre>,
    pub plot: String,
    /// Source rating on a 0-10 scale
    pub rating: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub keywords: Vec<String>,
    pub sub_moods: Vec<String>,
}

impl Movie {
    pub fn new(tmdb_id: Option<u64>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tmdb_id,
            title: title.into(),
            year,
            genres: Vec::new(),
            plot: String::new(),
            rating: 0.0,
            poster_path: None,
            backdrop_path: None,
            keywords: Vec::new(),
            sub_moods: Vec::new(),
        }
    }

    /// Source rating formatted to one decimal for display
    pub fn rating_formatted(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Genre labels flattened for display, e.g. "Horror · Thriller"
    pub fn genre_text(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Crude content-overlap score: shared genres weigh 3, shared keywords 2.
    pub fn similarity_score(&self, other: &Movie) -> u32 {
        let shared_genres = self
            .genres
            .iter()
            .filter(|g| other.genres.contains(g))
            .count() as u32;

        let other_keywords: Vec<String> =
            other.keywords.iter().map(|k| k.to_lowercase()).collect();
        let shared_keywords = self
            .keywords
            .iter()
            .filter(|k| other_keywords.contains(&k.to_lowercase()))
            .count() as u32;

        shared_genres * 3 + shared_keywords * 2
    }
}
