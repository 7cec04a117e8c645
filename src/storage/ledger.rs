//! Watched-movie ledger.
//!
//! Ordered newest-first; at most one entry per movie identity. Every
//! mutation rewrites the full snapshot through the backing store before
//! returning, and a revision channel notifies observers of changes.

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::{
    models::{Movie, Reaction, WatchedEntry},
    storage::KvStore,
};

const STORAGE_KEY: &str = "watched_movies";

pub struct WatchedLedger {
    store: Box<dyn KvStore>,
    entries: Vec<WatchedEntry>,
    revision: watch::Sender<u64>,
}

impl WatchedLedger {
    /// Loads the ledger from the store; absent or corrupt data starts empty
    pub fn open(store: Box<dyn KvStore>) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding corrupt watched-movie snapshot");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let (revision, _) = watch::channel(0);
        Self {
            store,
            entries,
            revision,
        }
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Observers see the revision counter bump on every mutation
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Records a rating for a movie.
    ///
    /// A movie already in the ledger gets its reaction and timestamp
    /// replaced in place, keeping its position; a new movie is inserted at
    /// the front.
    pub fn upsert(&mut self, movie: &Movie, reaction: Reaction) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.matches(movie)) {
            existing.reaction = reaction;
            existing.watched_at = Utc::now();
        } else {
            self.entries.insert(0, WatchedEntry::new(movie, reaction));
        }
        self.persist();
    }

    /// Removes by synthetic id; removing an absent id is a no-op
    pub fn remove(&mut self, id: Uuid) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    pub fn is_watched(&self, movie: &Movie) -> bool {
        self.entries.iter().any(|e| e.matches(movie))
    }

    pub fn reaction_for(&self, movie: &Movie) -> Option<Reaction> {
        self.entries
            .iter()
            .find(|e| e.matches(movie))
            .map(|e| e.reaction)
    }

    pub fn count_with(&self, reaction: Reaction) -> usize {
        self.entries
            .iter()
            .filter(|e| e.reaction == reaction)
            .count()
    }

    /// Mean source rating across the ledger, `None` when empty
    pub fn average_rating(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|e| e.source_rating).sum();
        Some(sum / self.entries.len() as f64)
    }

    /// Display form of the mean rating, with a sentinel for the empty ledger
    pub fn average_rating_label(&self) -> String {
        match self.average_rating() {
            Some(avg) => format!("{:.1}", avg),
            None => "—".to_string(),
        }
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => self.store.set(STORAGE_KEY, &json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize watched-movie snapshot"),
        }
        self.revision.send_modify(|rev| *rev += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ledger() -> WatchedLedger {
        WatchedLedger::open(Box::new(MemoryStore::new()))
    }

    fn movie(tmdb_id: Option<u64>, title: &str, year: i32, rating: f64) -> Movie {
        Movie {
            rating,
            ..Movie::new(tmdb_id, title, year)
        }
    }

    #[test]
    fn test_upsert_same_identity_keeps_one_entry() {
        let mut ledger = ledger();
        let matrix = movie(Some(603), "The Matrix", 1999, 8.2);

        ledger.upsert(&matrix, Reaction::Liked);
        ledger.upsert(&matrix, Reaction::Loved);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.reaction_for(&matrix), Some(Reaction::Loved));
    }

    #[test]
    fn test_upsert_matches_by_title_year_without_external_id() {
        let mut ledger = ledger();
        ledger.upsert(&movie(None, "Home Movie", 2021, 6.0), Reaction::Liked);
        ledger.upsert(&movie(None, "Home Movie", 2021, 6.0), Reaction::Disliked);
        ledger.upsert(&movie(None, "Home Movie", 2022, 6.0), Reaction::Liked);

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_new_entries_inserted_at_front() {
        let mut ledger = ledger();
        ledger.upsert(&movie(Some(1), "First", 2001, 7.0), Reaction::Liked);
        ledger.upsert(&movie(Some(2), "Second", 2002, 7.5), Reaction::Loved);

        assert_eq!(ledger.entries()[0].title, "Second");
        assert_eq!(ledger.entries()[1].title, "First");
    }

    #[test]
    fn test_rerating_keeps_position() {
        let mut ledger = ledger();
        let first = movie(Some(1), "First", 2001, 7.0);
        ledger.upsert(&first, Reaction::Liked);
        ledger.upsert(&movie(Some(2), "Second", 2002, 7.5), Reaction::Loved);

        ledger.upsert(&first, Reaction::Loved);

        assert_eq!(ledger.entries()[0].title, "Second");
        assert_eq!(ledger.entries()[1].title, "First");
        assert_eq!(ledger.entries()[1].reaction, Reaction::Loved);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut ledger = ledger();
        ledger.upsert(&movie(Some(1), "Kept", 2001, 7.0), Reaction::Liked);

        ledger.remove(Uuid::new_v4());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = ledger();
        ledger.upsert(&movie(Some(1), "Gone", 2001, 7.0), Reaction::Liked);
        let id = ledger.entries()[0].id;

        ledger.remove(id);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_average_rating_empty_is_sentinel() {
        let ledger = ledger();
        assert_eq!(ledger.average_rating(), None);
        assert_eq!(ledger.average_rating_label(), "—");
    }

    #[test]
    fn test_average_rating_one_decimal() {
        let mut ledger = ledger();
        ledger.upsert(&movie(Some(1), "A", 2001, 8.0), Reaction::Loved);
        ledger.upsert(&movie(Some(2), "B", 2002, 7.0), Reaction::Liked);

        assert_eq!(ledger.average_rating(), Some(7.5));
        assert_eq!(ledger.average_rating_label(), "7.5");
    }

    #[test]
    fn test_count_with_reaction() {
        let mut ledger = ledger();
        ledger.upsert(&movie(Some(1), "A", 2001, 8.0), Reaction::Loved);
        ledger.upsert(&movie(Some(2), "B", 2002, 7.0), Reaction::Liked);
        ledger.upsert(&movie(Some(3), "C", 2003, 6.0), Reaction::Loved);

        assert_eq!(ledger.count_with(Reaction::Loved), 2);
        assert_eq!(ledger.count_with(Reaction::Disliked), 0);
    }

    #[test]
    fn test_snapshot_survives_reopen() {
        let mut store = MemoryStore::new();
        {
            let mut ledger = WatchedLedger::open(Box::new(MemoryStore::new()));
            ledger.upsert(&movie(Some(603), "The Matrix", 1999, 8.2), Reaction::Loved);
            // Copy the snapshot into the outer store to simulate a restart
            // over the same backing data
            store.set(STORAGE_KEY, &ledger.store.get(STORAGE_KEY).unwrap());
        }

        let reopened = WatchedLedger::open(Box::new(store));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.entries()[0].title, "The Matrix");
        assert_eq!(reopened.entries()[0].reaction, Reaction::Loved);
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{definitely not json");

        let ledger = WatchedLedger::open(Box::new(store));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let mut ledger = ledger();
        let rx = ledger.subscribe();
        assert_eq!(*rx.borrow(), 0);

        ledger.upsert(&movie(Some(1), "A", 2001, 8.0), Reaction::Loved);
        assert_eq!(*rx.borrow(), 1);

        ledger.upsert(&movie(Some(1), "A", 2001, 8.0), Reaction::Liked);
        assert_eq!(*rx.borrow(), 2);
    }
}
