use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        ollama::OllamaProvider,
        providers::{tmdb::TmdbProvider, CatalogProvider, ChatProvider},
    },
    storage::{JsonFileStore, ProfileStore, WatchedLedger},
};

/// Shared application state
///
/// One instance per app process. The ledger and profile are behind locks so
/// completed fetches running off the UI thread can apply mutations without
/// violating the one-writer invariant.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub chat: Arc<dyn ChatProvider>,
    pub ledger: Arc<RwLock<WatchedLedger>>,
    pub profile: Arc<RwLock<ProfileStore>>,
}

impl AppState {
    /// Wires the real providers and file-backed stores from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let catalog = TmdbProvider::from_config(config)?;
        let chat = OllamaProvider::from_config(config);

        let ledger_store = JsonFileStore::open(config.data_dir.join("watched.json"));
        let profile_store = JsonFileStore::open(config.data_dir.join("profile.json"));

        Ok(Self {
            catalog: Arc::new(catalog),
            chat: Arc::new(chat),
            ledger: Arc::new(RwLock::new(WatchedLedger::open(Box::new(ledger_store)))),
            profile: Arc::new(RwLock::new(ProfileStore::open(Box::new(profile_store)))),
        })
    }

    /// Assembles state from explicit collaborators; used by tests and shells
    /// that bring their own providers or stores.
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        chat: Arc<dyn ChatProvider>,
        ledger: WatchedLedger,
        profile: ProfileStore,
    ) -> Self {
        Self {
            catalog,
            chat,
            ledger: Arc::new(RwLock::new(ledger)),
            profile: Arc::new(RwLock::new(profile)),
        }
    }
}
