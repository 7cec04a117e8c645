pub mod chat;
pub mod feed;
pub mod ollama;
pub mod providers;
pub mod query_builder;
pub mod questionnaire;
pub mod similarity;
