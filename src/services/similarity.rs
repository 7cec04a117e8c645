use crate::{
    error::AppResult,
    models::Movie,
    services::providers::CatalogProvider,
};

/// Search kicks in from two characters; shorter input resolves empty
/// without a network call.
const MIN_QUERY_LEN: usize = 2;

/// Free-text title search for the "movies like X" flow
pub async fn search(
    catalog: &dyn CatalogProvider,
    query: &str,
    page: u32,
) -> AppResult<Vec<Movie>> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Ok(Vec::new());
    }
    catalog.search_movies(query, page).await
}

/// Movies similar to the given one.
///
/// A movie without an external catalog id resolves to an empty list
/// immediately; the remote service has nothing to match on.
pub async fn find_similar(catalog: &dyn CatalogProvider, movie: &Movie) -> AppResult<Vec<Movie>> {
    match movie.tmdb_id {
        Some(tmdb_id) => catalog.fetch_similar(tmdb_id).await,
        None => Ok(Vec::new()),
    }
}
