/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Catalog API returned status {0}")]
    CatalogStatus(u16),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("TMDB API key not configured")]
    NotConfigured,

    #[error("Chat service unreachable")]
    ChatUnreachable,

    #[error("Chat model '{0}' not found")]
    ChatModelMissing(String),

    #[error("Chat API returned status {0}")]
    ChatStatus(u16),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_status_message_carries_code() {
        let err = AppError::CatalogStatus(404);
        assert_eq!(err.to_string(), "Catalog API returned status 404");
    }

    #[test]
    fn test_chat_model_missing_names_model() {
        let err = AppError::ChatModelMissing("llama3.2".to_string());
        assert!(err.to_string().contains("llama3.2"));
    }
}
