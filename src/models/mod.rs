use serde::Deserialize;
use uuid::Uuid;

pub mod genre;
pub mod movie;
pub mod options;
pub mod watched;

pub use genre::Genre;
pub use movie::Movie;
pub use options::{Company, Era, RatingTier, SubgenreOption, Vibe};
pub use watched::{Reaction, WatchedEntry};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw movie-list response from the TMDB API
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieListResponse {
    pub page: u32,
    pub results: Vec<TmdbMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Raw movie record as returned by TMDB list and detail endpoints
///
/// List endpoints carry `genre_ids`; the detail endpoint carries expanded
/// `genres` objects instead. Both resolve through the closed genre set, and
/// ids outside it are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

impl TmdbMovie {
    /// Release year parsed from the date prefix; 0 when absent or malformed
    pub fn year(&self) -> i32 {
        self.release_date
            .as_deref()
            .filter(|d| d.len() >= 4)
            .and_then(|d| d[..4].parse().ok())
            .unwrap_or(0)
    }

    fn resolved_genres(&self) -> Vec<Genre> {
        let ids: Vec<u64> = match (&self.genre_ids, &self.genres) {
            (Some(ids), _) => ids.clone(),
            (None, Some(genres)) => genres.iter().map(|g| g.id).collect(),
            (None, None) => Vec::new(),
        };
        ids.into_iter().filter_map(Genre::from_tmdb_id).collect()
    }
}

impl From<TmdbMovie> for Movie {
    fn from(raw: TmdbMovie) -> Self {
        let year = raw.year();
        let genres = raw.resolved_genres();
        Movie {
            id: Uuid::new_v4(),
            tmdb_id: Some(raw.id),
            title: raw.title,
            year,
            genres,
            plot: raw.overview,
            rating: raw.vote_average,
            poster_path: raw.poster_path,
            backdrop_path: raw.backdrop_path,
            keywords: Vec::new(),
            sub_moods: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_movie_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets",
            "poster_path": "/inception.jpg",
            "release_date": "2010-07-15",
            "vote_average": 8.4,
            "vote_count": 34000,
            "genre_ids": [28, 878, 53]
        }"#;

        let raw: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 27205);
        assert_eq!(raw.year(), 2010);
        assert_eq!(raw.vote_count, 34000);
    }

    #[test]
    fn test_tmdb_movie_to_movie_resolves_genres() {
        let raw = TmdbMovie {
            id: 27205,
            title: "Inception".to_string(),
            overview: "A thief who steals corporate secrets".to_string(),
            poster_path: Some("/inception.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("2010-07-15".to_string()),
            vote_average: 8.4,
            vote_count: 34000,
            genre_ids: Some(vec![28, 878, 53]),
            genres: None,
        };

        let movie: Movie = raw.into();
        assert_eq!(movie.tmdb_id, Some(27205));
        assert_eq!(movie.year, 2010);
        assert_eq!(
            movie.genres,
            vec![Genre::Action, Genre::SciFi, Genre::Thriller]
        );
        assert_eq!(movie.rating, 8.4);
    }

    #[test]
    fn test_tmdb_movie_detail_shape_uses_genre_objects() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"}
            ]
        }"#;

        let raw: TmdbMovie = serde_json::from_str(json).unwrap();
        let movie: Movie = raw.into();
        assert_eq!(movie.genres, vec![Genre::Action, Genre::SciFi]);
    }

    #[test]
    fn test_tmdb_movie_unknown_genre_ids_dropped() {
        let raw = TmdbMovie {
            id: 1,
            title: "Documentary".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: 7.0,
            vote_count: 10,
            // 99 is a TMDB genre (Documentary) outside the app's closed set
            genre_ids: Some(vec![99, 18]),
            genres: None,
        };

        let movie: Movie = raw.into();
        assert_eq!(movie.genres, vec![Genre::Drama]);
        assert_eq!(movie.year, 0);
    }

    #[test]
    fn test_movie_list_response_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [{"id": 1, "title": "A"}],
            "total_pages": 3,
            "total_results": 55
        }"#;

        let response: TmdbMovieListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.total_pages, 3);
    }
}
