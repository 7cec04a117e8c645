//! Headless engine for the CineFlow movie-discovery app.
//!
//! Everything below the UI lives here: the TMDB catalog client, the local
//! Ollama chat client, the guided "what to watch" questionnaire, the home
//! feed loader, and the on-device watched-movie ledger. A UI shell holds an
//! [`state::AppState`] and calls into the services.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
