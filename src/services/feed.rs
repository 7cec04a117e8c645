//! Home-feed loader.
//!
//! The six primary sections load concurrently and join as a single unit: if
//! any of them fails, the whole feed fails and nothing partial is shown.
//! Per-favorite-genre sections load afterward, sequentially, and each one
//! swallows its own failure so a bad genre fetch only omits that section.

use crate::{
    error::AppResult,
    models::{Genre, Movie},
    services::providers::CatalogProvider,
};

/// Cap per "for you" genre section
const GENRE_SECTION_LIMIT: usize = 15;

#[derive(Debug, Default, PartialEq)]
pub struct HomeFeed {
    pub trending: Vec<Movie>,
    pub now_playing: Vec<Movie>,
    pub top_rated: Vec<Movie>,
    pub popular: Vec<Movie>,
    pub upcoming: Vec<Movie>,
    pub critically_acclaimed: Vec<Movie>,
    /// One section per favorite genre, in profile order; failed or empty
    /// fetches are omitted
    pub genre_sections: Vec<(Genre, Vec<Movie>)>,
}

pub async fn load_home_feed(
    catalog: &dyn CatalogProvider,
    favorite_genres: &[Genre],
) -> AppResult<HomeFeed> {
    let (trending, now_playing, top_rated, popular, upcoming, critically_acclaimed) = tokio::try_join!(
        catalog.fetch_trending(),
        catalog.fetch_now_playing(1),
        catalog.fetch_top_rated(1),
        catalog.fetch_popular(1),
        catalog.fetch_upcoming(1),
        catalog.fetch_top_rated(2),
    )?;

    let mut feed = HomeFeed {
        trending,
        now_playing,
        top_rated,
        popular,
        upcoming,
        critically_acclaimed,
        genre_sections: Vec::new(),
    };

    for &genre in favorite_genres {
        match catalog.discover_by_genre(genre, 1).await {
            Ok(mut movies) => {
                if movies.is_empty() {
                    continue;
                }
                movies.truncate(GENRE_SECTION_LIMIT);
                feed.genre_sections.push((genre, movies));
            }
            Err(e) => {
                tracing::warn!(genre = %genre, error = %e, "Skipping genre section");
            }
        }
    }

    tracing::info!(
        trending = feed.trending.len(),
        genre_sections = feed.genre_sections.len(),
        "Home feed loaded"
    );

    Ok(feed)
}
