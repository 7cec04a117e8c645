//! Questionnaire option tables.
//!
//! Every option set is a data table: each case carries its display metadata
//! and its contribution to the discovery query (extra genre ids, keyword
//! filter, date bounds, vote thresholds, sort key), so nothing downstream
//! branches per case.

use super::Genre;

/// A genre-dependent subgenre, or a fallback mood when no genre was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgenreOption {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Extra TMDB genre ids this option contributes to the query
    pub extra_genre_ids: &'static [u64],
    /// TMDB keyword ids, comma-separated; empty when the option has none
    pub keyword_filter: &'static str,
}

impl SubgenreOption {
    /// Subgenre options for a chosen genre
    pub fn options_for(genre: Genre) -> &'static [SubgenreOption] {
        match genre {
            Genre::Romance => &[
                SubgenreOption { id: "rom_light", title: "Light & Sweet", subtitle: "Warm, feel-good love stories", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "rom_comedy", title: "Romantic Comedy", subtitle: "Funny, charming, and heartwarming", extra_genre_ids: &[35], keyword_filter: "" },
                SubgenreOption { id: "rom_drama", title: "Dramatic Romance", subtitle: "Deep, intense love stories", extra_genre_ids: &[18], keyword_filter: "" },
                SubgenreOption { id: "rom_period", title: "Period Romance", subtitle: "Historical love stories, costume dramas", extra_genre_ids: &[36], keyword_filter: "" },
            ],
            Genre::Horror => &[
                SubgenreOption { id: "hor_slasher", title: "Slasher", subtitle: "Masked killers, survival horror", extra_genre_ids: &[], keyword_filter: "186427" },
                SubgenreOption { id: "hor_psych", title: "Psychological Horror", subtitle: "Mind games, creeping dread", extra_genre_ids: &[53], keyword_filter: "" },
                SubgenreOption { id: "hor_found", title: "Found Footage", subtitle: "Handheld cameras, raw terror", extra_genre_ids: &[], keyword_filter: "224636" },
                SubgenreOption { id: "hor_body", title: "Body Horror", subtitle: "Grotesque transformations", extra_genre_ids: &[], keyword_filter: "190065" },
                SubgenreOption { id: "hor_super", title: "Supernatural", subtitle: "Ghosts, demons, the unknown", extra_genre_ids: &[], keyword_filter: "162846" },
            ],
            Genre::Crime => &[
                SubgenreOption { id: "cri_police", title: "Police Procedural", subtitle: "Detectives cracking cases", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "cri_heist", title: "Heist", subtitle: "Elaborate plans, big scores", extra_genre_ids: &[], keyword_filter: "10068" },
                SubgenreOption { id: "cri_gang", title: "Gangster / Mafia", subtitle: "Organized crime, power plays", extra_genre_ids: &[], keyword_filter: "1696" },
                SubgenreOption { id: "cri_true", title: "True Crime", subtitle: "Based on real events", extra_genre_ids: &[], keyword_filter: "9672" },
            ],
            Genre::Action => &[
                SubgenreOption { id: "act_martial", title: "Martial Arts", subtitle: "Hand-to-hand combat, choreographed fights", extra_genre_ids: &[], keyword_filter: "779" },
                SubgenreOption { id: "act_military", title: "Military / War", subtitle: "Battlefields, soldiers, strategy", extra_genre_ids: &[10752], keyword_filter: "" },
                SubgenreOption { id: "act_spy", title: "Spy / Espionage", subtitle: "Secret agents, covert ops", extra_genre_ids: &[], keyword_filter: "470" },
                SubgenreOption { id: "act_super", title: "Superhero", subtitle: "Powers, capes, saving the world", extra_genre_ids: &[], keyword_filter: "9715" },
            ],
            Genre::Comedy => &[
                SubgenreOption { id: "com_slap", title: "Slapstick", subtitle: "Physical humor, over-the-top laughs", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "com_dark", title: "Dark Comedy", subtitle: "Twisted, edgy, morbid humor", extra_genre_ids: &[], keyword_filter: "11800" },
                SubgenreOption { id: "com_rom", title: "Romantic Comedy", subtitle: "Love with laughs", extra_genre_ids: &[10749], keyword_filter: "" },
                SubgenreOption { id: "com_parody", title: "Parody / Satire", subtitle: "Mocking genres, pop culture", extra_genre_ids: &[], keyword_filter: "189098" },
            ],
            Genre::Drama => &[
                SubgenreOption { id: "dra_court", title: "Courtroom Drama", subtitle: "Trials, lawyers, justice", extra_genre_ids: &[], keyword_filter: "10087" },
                SubgenreOption { id: "dra_bio", title: "Biographical", subtitle: "Real people, true stories", extra_genre_ids: &[], keyword_filter: "818" },
                SubgenreOption { id: "dra_family", title: "Family Drama", subtitle: "Relationships, dysfunction, bonds", extra_genre_ids: &[], keyword_filter: "155906" },
                SubgenreOption { id: "dra_war", title: "War Drama", subtitle: "Human cost of conflict", extra_genre_ids: &[10752], keyword_filter: "" },
            ],
            Genre::SciFi => &[
                SubgenreOption { id: "sci_space", title: "Space Opera", subtitle: "Epic adventures among the stars", extra_genre_ids: &[], keyword_filter: "3801" },
                SubgenreOption { id: "sci_dys", title: "Dystopian", subtitle: "Dark futures, broken societies", extra_genre_ids: &[], keyword_filter: "4458" },
                SubgenreOption { id: "sci_time", title: "Time Travel", subtitle: "Past and future collide", extra_genre_ids: &[], keyword_filter: "4379" },
                SubgenreOption { id: "sci_cyber", title: "Cyberpunk", subtitle: "Neon cities, tech noir, hackers", extra_genre_ids: &[], keyword_filter: "12190" },
            ],
            Genre::Thriller => &[
                SubgenreOption { id: "thr_psych", title: "Psychological Thriller", subtitle: "Mind games, unreliable narrators", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "thr_polit", title: "Political Thriller", subtitle: "Conspiracies, power struggles", extra_genre_ids: &[], keyword_filter: "11162" },
                SubgenreOption { id: "thr_crime", title: "Crime Thriller", subtitle: "Cat-and-mouse, investigations", extra_genre_ids: &[80], keyword_filter: "" },
                SubgenreOption { id: "thr_surv", title: "Survival Thriller", subtitle: "Against all odds, staying alive", extra_genre_ids: &[], keyword_filter: "10349" },
            ],
            Genre::Animation => &[
                SubgenreOption { id: "ani_family", title: "Family Animated", subtitle: "Fun for kids and adults alike", extra_genre_ids: &[10751], keyword_filter: "" },
                SubgenreOption { id: "ani_anime", title: "Anime-Style", subtitle: "Japanese animation & storytelling", extra_genre_ids: &[], keyword_filter: "210024" },
                SubgenreOption { id: "ani_adult", title: "Adult Animation", subtitle: "Mature themes, not for kids", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "ani_musical", title: "Animated Musical", subtitle: "Songs, spectacle, heartfelt stories", extra_genre_ids: &[10402], keyword_filter: "" },
            ],
            Genre::Mystery => &[
                SubgenreOption { id: "mys_who", title: "Whodunit", subtitle: "Who did it? Classic detective puzzle", extra_genre_ids: &[], keyword_filter: "187056" },
                SubgenreOption { id: "mys_noir", title: "Noir", subtitle: "Dark, moody, cynical atmosphere", extra_genre_ids: &[], keyword_filter: "1937" },
                SubgenreOption { id: "mys_consp", title: "Conspiracy", subtitle: "Nothing is what it seems", extra_genre_ids: &[53], keyword_filter: "" },
                SubgenreOption { id: "mys_detect", title: "Detective Story", subtitle: "Following clues, solving crimes", extra_genre_ids: &[80], keyword_filter: "" },
            ],
            Genre::Adventure => &[
                SubgenreOption { id: "adv_treasure", title: "Treasure Hunt", subtitle: "Ancient maps, lost artifacts", extra_genre_ids: &[], keyword_filter: "2428" },
                SubgenreOption { id: "adv_explore", title: "Exploration", subtitle: "Uncharted lands, discovery", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "adv_surv", title: "Survival Adventure", subtitle: "Stranded, fighting nature", extra_genre_ids: &[], keyword_filter: "10349" },
                SubgenreOption { id: "adv_epic", title: "Epic Quest", subtitle: "Grand journeys, destiny awaits", extra_genre_ids: &[14], keyword_filter: "" },
            ],
            Genre::Fantasy => &[
                SubgenreOption { id: "fan_high", title: "High Fantasy", subtitle: "Vast worlds, magical systems, lore", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "fan_dark", title: "Dark Fantasy", subtitle: "Grim, gothic, morally gray", extra_genre_ids: &[], keyword_filter: "235019" },
                SubgenreOption { id: "fan_urban", title: "Urban Fantasy", subtitle: "Magic in the modern world", extra_genre_ids: &[], keyword_filter: "" },
                SubgenreOption { id: "fan_fairy", title: "Fairy Tale / Myth", subtitle: "Retellings, legends, folklore", extra_genre_ids: &[], keyword_filter: "2038" },
            ],
        }
    }

    /// Mood options shown when the genre step was skipped
    pub const FALLBACK_MOODS: [SubgenreOption; 6] = [
        SubgenreOption { id: "mood_happy", title: "Feel-Good", subtitle: "Uplifting, fun, leaves you smiling", extra_genre_ids: &[35], keyword_filter: "" },
        SubgenreOption { id: "mood_dark", title: "Dark & Intense", subtitle: "Gritty, raw, emotionally heavy", extra_genre_ids: &[80], keyword_filter: "" },
        SubgenreOption { id: "mood_thrill", title: "Heart-Pounding", subtitle: "Tense, suspenseful, on the edge", extra_genre_ids: &[28, 53], keyword_filter: "" },
        SubgenreOption { id: "mood_think", title: "Thought-Provoking", subtitle: "Makes you think, layered story", extra_genre_ids: &[18], keyword_filter: "" },
        SubgenreOption { id: "mood_chill", title: "Chill & Easy", subtitle: "Low-key, casual, easy watch", extra_genre_ids: &[35, 10751], keyword_filter: "" },
        SubgenreOption { id: "mood_emo", title: "Emotional & Moving", subtitle: "Touching, might make you cry", extra_genre_ids: &[18, 10749], keyword_filter: "" },
    ];
}

/// Who the user is watching with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    Solo,
    Date,
    Friends,
    Family,
}

impl Company {
    pub const ALL: [Company; 4] = [
        Company::Solo,
        Company::Date,
        Company::Friends,
        Company::Family,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Company::Solo => "Just Me",
            Company::Date => "Date Night",
            Company::Friends => "With Friends",
            Company::Family => "Family Movie Night",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Company::Solo => "Something personal and immersive",
            Company::Date => "Romantic, engaging, not too heavy",
            Company::Friends => "Fun, quotable, crowd-pleaser",
            Company::Family => "Appropriate and enjoyable for all ages",
        }
    }

    pub fn extra_genre_ids(self) -> &'static [u64] {
        match self {
            Company::Solo => &[],
            Company::Date => &[10749],
            Company::Friends => &[35],
            Company::Family => &[10751, 16],
        }
    }
}

/// Release-date bucket filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Classics,
    Nineties,
    Modern,
    Recent,
}

impl Era {
    pub const ALL: [Era; 4] = [Era::Classics, Era::Nineties, Era::Modern, Era::Recent];

    pub fn title(self) -> &'static str {
        match self {
            Era::Classics => "Classics",
            Era::Nineties => "90s & 2000s",
            Era::Modern => "2010s",
            Era::Recent => "Recent",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Era::Classics => "Timeless films before 1990",
            Era::Nineties => "Nostalgic hits from 1990-2009",
            Era::Modern => "Modern cinema 2010-2019",
            Era::Recent => "Latest releases 2020+",
        }
    }

    pub fn min_date(self) -> Option<&'static str> {
        match self {
            Era::Classics => None,
            Era::Nineties => Some("1990-01-01"),
            Era::Modern => Some("2010-01-01"),
            Era::Recent => Some("2020-01-01"),
        }
    }

    pub fn max_date(self) -> Option<&'static str> {
        match self {
            Era::Classics => Some("1989-12-31"),
            Era::Nineties => Some("2009-12-31"),
            Era::Modern => Some("2019-12-31"),
            Era::Recent => None,
        }
    }
}

/// How picky the user is about ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Masterpiece,
    Good,
    Anything,
    Underrated,
}

impl RatingTier {
    pub const ALL: [RatingTier; 4] = [
        RatingTier::Masterpiece,
        RatingTier::Good,
        RatingTier::Anything,
        RatingTier::Underrated,
    ];

    pub fn title(self) -> &'static str {
        match self {
            RatingTier::Masterpiece => "Only the Best",
            RatingTier::Good => "Well-Rated",
            RatingTier::Anything => "I'll Try Anything",
            RatingTier::Underrated => "Underrated Picks",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            RatingTier::Masterpiece => "8.0+ rating, critically acclaimed",
            RatingTier::Good => "6.5+ rating, solid movies",
            RatingTier::Anything => "Any rating, just entertain me",
            RatingTier::Underrated => "Low vote count, hidden potential",
        }
    }

    // Thresholds are passed through to the query string untyped, so they
    // stay strings here.
    pub fn min_rating(self) -> &'static str {
        match self {
            RatingTier::Masterpiece => "8.0",
            RatingTier::Good => "6.5",
            RatingTier::Anything => "0",
            RatingTier::Underrated => "6.0",
        }
    }

    pub fn min_votes(self) -> &'static str {
        match self {
            RatingTier::Masterpiece => "500",
            RatingTier::Good => "200",
            RatingTier::Anything => "20",
            RatingTier::Underrated => "10",
        }
    }
}

/// Sort-order preference for the final step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Popular,
    Rated,
    Hidden,
    Blockbuster,
}

impl Vibe {
    pub const ALL: [Vibe; 4] = [Vibe::Popular, Vibe::Rated, Vibe::Hidden, Vibe::Blockbuster];

    pub fn title(self) -> &'static str {
        match self {
            Vibe::Popular => "Crowd Favorites",
            Vibe::Rated => "Critically Acclaimed",
            Vibe::Hidden => "Hidden Gems",
            Vibe::Blockbuster => "Box Office Hits",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Vibe::Popular => "Most popular with audiences",
            Vibe::Rated => "Highest ratings from critics",
            Vibe::Hidden => "Under-the-radar picks",
            Vibe::Blockbuster => "Big budget spectacles",
        }
    }

    pub fn sort_by(self) -> &'static str {
        match self {
            Vibe::Popular => "popularity.desc",
            Vibe::Rated => "vote_average.desc",
            Vibe::Hidden => "vote_average.desc",
            Vibe::Blockbuster => "revenue.desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_genre_has_subgenres() {
        for genre in Genre::ALL {
            let options = SubgenreOption::options_for(genre);
            assert!(!options.is_empty(), "{genre} has no subgenre options");
        }
    }

    #[test]
    fn test_subgenre_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for genre in Genre::ALL {
            for option in SubgenreOption::options_for(genre) {
                // Romantic Comedy appears under both Romance and Comedy with
                // distinct ids; every id must still be unique per table scan.
                assert!(seen.insert((genre, option.id)));
            }
        }
        for mood in SubgenreOption::FALLBACK_MOODS {
            assert!(seen.iter().all(|(_, id)| *id != mood.id));
        }
    }

    #[test]
    fn test_psychological_horror_contributes_thriller() {
        let options = SubgenreOption::options_for(Genre::Horror);
        let psych = options.iter().find(|o| o.id == "hor_psych").unwrap();
        assert_eq!(psych.extra_genre_ids, &[53]);
        assert!(psych.keyword_filter.is_empty());
    }

    #[test]
    fn test_company_contributions() {
        assert!(Company::Solo.extra_genre_ids().is_empty());
        assert_eq!(Company::Date.extra_genre_ids(), &[10749]);
        assert_eq!(Company::Family.extra_genre_ids(), &[10751, 16]);
    }

    #[test]
    fn test_era_bounds() {
        assert_eq!(Era::Classics.min_date(), None);
        assert_eq!(Era::Classics.max_date(), Some("1989-12-31"));
        assert_eq!(Era::Recent.min_date(), Some("2020-01-01"));
        assert_eq!(Era::Recent.max_date(), None);
    }

    #[test]
    fn test_rating_tier_thresholds() {
        assert_eq!(RatingTier::Masterpiece.min_rating(), "8.0");
        assert_eq!(RatingTier::Masterpiece.min_votes(), "500");
        assert_eq!(RatingTier::Underrated.min_votes(), "10");
    }

    #[test]
    fn test_vibe_sort_keys() {
        assert_eq!(Vibe::Popular.sort_by(), "popularity.desc");
        assert_eq!(Vibe::Blockbuster.sort_by(), "revenue.desc");
    }
}
