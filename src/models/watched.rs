use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Movie;

/// The user's subjective reaction to a watched movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Disliked,
    Liked,
    Loved,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Disliked, Reaction::Liked, Reaction::Loved];

    pub fn label(self) -> &'static str {
        match self {
            Reaction::Disliked => "Didn't Like It",
            Reaction::Liked => "Liked It",
            Reaction::Loved => "Loved It",
        }
    }
}

/// A persisted record of a movie the user has watched and rated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    pub id: Uuid,
    pub tmdb_id: Option<u64>,
    pub title: String,
    pub year: i32,
    pub poster_path: Option<String>,
    /// Flattened genre labels, frozen at rating time
    pub genre_text: String,
    /// Source rating, frozen at rating time
    pub source_rating: f64,
    pub reaction: Reaction,
    pub watched_at: DateTime<Utc>,
}

impl WatchedEntry {
    pub fn new(movie: &Movie, reaction: Reaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            tmdb_id: movie.tmdb_id,
            title: movie.title.clone(),
            year: movie.year,
            poster_path: movie.poster_path.clone(),
            genre_text: movie.genre_text(),
            source_rating: movie.rating,
            reaction,
            watched_at: Utc::now(),
        }
    }

    /// Identity rule: TMDB id when both sides have one, else title + year.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let (Some(own), Some(other)) = (self.tmdb_id, movie.tmdb_id) {
            return own == other;
        }
        self.title == movie.title && self.year == movie.year
    }
}
