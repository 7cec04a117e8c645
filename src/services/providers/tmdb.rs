/// TMDB catalog provider
///
/// Wraps the TMDB v3 REST API. Every request carries the api_key and
/// language query parameters; non-2xx responses map to a status-carrying
/// error and body-shape mismatches to `InvalidResponse`.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Genre, Movie, TmdbMovie, TmdbMovieListResponse},
    services::providers::CatalogProvider,
};

/// Vote-count floor for the home-feed genre sections
const GENRE_SECTION_MIN_VOTES: &str = "200";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Builds a provider from configuration, failing fast when no key is set
    pub fn from_config(config: &Config) -> AppResult<Self> {
        if !config.is_configured() {
            return Err(AppError::NotConfigured);
        }
        let api_key = config.tmdb_api_key.clone().unwrap_or_default();
        Ok(Self::new(api_key, config.tmdb_api_url.clone()))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, path = %path, "TMDB request failed");
            return Err(AppError::CatalogStatus(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, path = %path, "Failed to parse TMDB response");
            AppError::InvalidResponse(e.to_string())
        })
    }

    async fn fetch_list(&self, path: &str, params: &[(String, String)]) -> AppResult<Vec<Movie>> {
        let response: TmdbMovieListResponse = self.request(path, params).await?;
        let movies: Vec<Movie> = response.results.into_iter().map(Movie::from).collect();

        tracing::debug!(path = %path, results = movies.len(), provider = "tmdb", "Catalog fetch completed");

        Ok(movies)
    }

    fn page_params(page: u32) -> Vec<(String, String)> {
        vec![("page".to_string(), page.to_string())]
    }

    fn discover_params(
        genre_ids: &[u64],
        sort_by: &str,
        extra_params: &[(String, String)],
        page: u32,
    ) -> Vec<(String, String)> {
        let genre_str = genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = vec![
            ("with_genres".to_string(), genre_str),
            ("sort_by".to_string(), sort_by.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        params.extend(extra_params.iter().cloned());
        params
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_trending(&self) -> AppResult<Vec<Movie>> {
        self.fetch_list("/trending/movie/week", &[]).await
    }

    async fn fetch_popular(&self, page: u32) -> AppResult<Vec<Movie>> {
        self.fetch_list("/movie/popular", &Self::page_params(page))
            .await
    }

    async fn fetch_top_rated(&self, page: u32) -> AppResult<Vec<Movie>> {
        self.fetch_list("/movie/top_rated", &Self::page_params(page))
            .await
    }

    async fn fetch_now_playing(&self, page: u32) -> AppResult<Vec<Movie>> {
        self.fetch_list("/movie/now_playing", &Self::page_params(page))
            .await
    }

    async fn fetch_upcoming(&self, page: u32) -> AppResult<Vec<Movie>> {
        self.fetch_list("/movie/upcoming", &Self::page_params(page))
            .await
    }

    async fn discover(
        &self,
        genre_ids: &[u64],
        sort_by: &str,
        extra_params: &[(String, String)],
        page: u32,
    ) -> AppResult<Vec<Movie>> {
        let params = Self::discover_params(genre_ids, sort_by, extra_params, page);
        self.fetch_list("/discover/movie", &params).await
    }

    async fn discover_by_genre(&self, genre: Genre, page: u32) -> AppResult<Vec<Movie>> {
        let params = vec![
            ("with_genres".to_string(), genre.tmdb_id().to_string()),
            ("sort_by".to_string(), "vote_average.desc".to_string()),
            (
                "vote_count.gte".to_string(),
                GENRE_SECTION_MIN_VOTES.to_string(),
            ),
            ("page".to_string(), page.to_string()),
        ];
        self.fetch_list("/discover/movie", &params).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Vec<Movie>> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        self.fetch_list("/search/movie", &params).await
    }

    async fn fetch_similar(&self, tmdb_id: u64) -> AppResult<Vec<Movie>> {
        self.fetch_list(&format!("/movie/{}/similar", tmdb_id), &[])
            .await
    }

    async fn fetch_movie_details(&self, tmdb_id: u64) -> AppResult<Movie> {
        let raw: TmdbMovie = self.request(&format!("/movie/{}", tmdb_id), &[]).await?;
        Ok(raw.into())
    }

    async fn fetch_recommendations(&self, tmdb_id: u64) -> AppResult<Vec<Movie>> {
        self.fetch_list(&format!("/movie/{}/recommendations", tmdb_id), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_params_joins_genre_ids() {
        let params = TmdbProvider::discover_params(&[27, 53], "popularity.desc", &[], 1);
        assert_eq!(
            params,
            vec![
                ("with_genres".to_string(), "27,53".to_string()),
                ("sort_by".to_string(), "popularity.desc".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_discover_params_appends_extra_params() {
        let extra = vec![
            ("vote_count.gte".to_string(), "50".to_string()),
            (
                "primary_release_date.lte".to_string(),
                "1989-12-31".to_string(),
            ),
        ];
        let params = TmdbProvider::discover_params(&[27], "popularity.desc", &extra, 2);

        assert_eq!(params[2], ("page".to_string(), "2".to_string()));
        assert!(params.contains(&("vote_count.gte".to_string(), "50".to_string())));
        assert!(params.contains(&(
            "primary_release_date.lte".to_string(),
            "1989-12-31".to_string()
        )));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = Config {
            tmdb_api_key: None,
            tmdb_api_url: "https://api.themoviedb.org/3".to_string(),
            tmdb_image_url: "https://image.tmdb.org/t/p".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            data_dir: ".".into(),
        };

        assert!(matches!(
            TmdbProvider::from_config(&config),
            Err(AppError::NotConfigured)
        ));
    }
}
