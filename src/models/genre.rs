use serde::{Deserialize, Serialize};

/// The closed set of genres the app exposes.
///
/// Serialized by display label ("Sci-Fi", not "SciFi") because the profile
/// store persists labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Animation,
    Mystery,
    Adventure,
    Crime,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Animation,
        Genre::Mystery,
        Genre::Adventure,
        Genre::Crime,
        Genre::Fantasy,
    ];

    /// TMDB genre ID used in API requests
    pub fn tmdb_id(self) -> u64 {
        match self {
            Genre::Action => 28,
            Genre::Comedy => 35,
            Genre::Drama => 18,
            Genre::Horror => 27,
            Genre::Romance => 10749,
            Genre::SciFi => 878,
            Genre::Thriller => 53,
            Genre::Animation => 16,
            Genre::Mystery => 9648,
            Genre::Adventure => 12,
            Genre::Crime => 80,
            Genre::Fantasy => 14,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::Animation => "Animation",
            Genre::Mystery => "Mystery",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Fantasy => "Fantasy",
        }
    }

    pub fn from_tmdb_id(id: u64) -> Option<Genre> {
        Self::ALL.into_iter().find(|g| g.tmdb_id() == id)
    }

    pub fn from_label(label: &str) -> Option<Genre> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
