//! User profile persistence.
//!
//! Plain scalar keys in the local store, no schema versioning. Favorite
//! genres are stored as a comma-joined label string; labels that no longer
//! parse are skipped on load.

use tokio::sync::watch;

use crate::{models::Genre, storage::KvStore};

const KEY_NAME: &str = "user_name";
const KEY_AGE: &str = "user_age";
const KEY_ONBOARDED: &str = "has_completed_onboarding";
const KEY_FAVORITE_GENRES: &str = "favorite_genres";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub completed_onboarding: bool,
    pub favorite_genres: Vec<Genre>,
}

pub struct ProfileStore {
    store: Box<dyn KvStore>,
    profile: Profile,
    revision: watch::Sender<u64>,
}

impl ProfileStore {
    pub fn open(store: Box<dyn KvStore>) -> Self {
        let profile = Profile {
            name: store.get(KEY_NAME).unwrap_or_default(),
            age: store
                .get(KEY_AGE)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0),
            completed_onboarding: store
                .get(KEY_ONBOARDED)
                .is_some_and(|raw| raw == "true"),
            favorite_genres: store
                .get(KEY_FAVORITE_GENRES)
                .map(|raw| decode_genres(&raw))
                .unwrap_or_default(),
        };

        let (revision, _) = watch::channel(0);
        Self {
            store,
            profile,
            revision,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn complete_onboarding(&mut self, name: &str, age: u32, genres: Vec<Genre>) {
        self.profile = Profile {
            name: name.to_string(),
            age,
            completed_onboarding: true,
            favorite_genres: genres,
        };
        self.persist();
    }

    pub fn set_favorite_genres(&mut self, genres: Vec<Genre>) {
        self.profile.favorite_genres = genres;
        self.persist();
    }

    pub fn reset(&mut self) {
        self.profile = Profile::default();
        self.persist();
    }

    fn persist(&mut self) {
        self.store.set(KEY_NAME, &self.profile.name);
        self.store.set(KEY_AGE, &self.profile.age.to_string());
        self.store.set(
            KEY_ONBOARDED,
            if self.profile.completed_onboarding {
                "true"
            } else {
                "false"
            },
        );
        self.store
            .set(KEY_FAVORITE_GENRES, &encode_genres(&self.profile.favorite_genres));
        self.revision.send_modify(|rev| *rev += 1);
    }
}

fn encode_genres(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| g.label())
        .collect::<Vec<_>>()
        .join(",")
}

fn decode_genres(raw: &str) -> Vec<Genre> {
    raw.split(',')
        .filter_map(Genre::from_label)
        .collect()
}
