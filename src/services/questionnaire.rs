//! Guided "what to watch" flow.
//!
//! A linear seven-position state machine. Selecting or skipping always
//! advances exactly one step; stepping back clears the now-current answer and
//! every answer after it, because later answers are only meaningful in the
//! context of the earlier ones.

use crate::{
    models::{Company, Era, Genre, Movie, RatingTier, SubgenreOption, Vibe},
    services::{
        providers::CatalogProvider,
        query_builder::{self, DiscoveryQuery, FilterSelection},
    },
};

/// Recommendations shown at the terminal step are capped at ten
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Genre,
    Subgenre,
    Company,
    Era,
    Rating,
    Vibe,
    Results,
}

impl Step {
    pub const COUNT: usize = 7;

    pub fn index(self) -> usize {
        match self {
            Step::Genre => 0,
            Step::Subgenre => 1,
            Step::Company => 2,
            Step::Era => 3,
            Step::Rating => 4,
            Step::Vibe => 5,
            Step::Results => 6,
        }
    }

    fn next(self) -> Step {
        match self {
            Step::Genre => Step::Subgenre,
            Step::Subgenre => Step::Company,
            Step::Company => Step::Era,
            Step::Era => Step::Rating,
            Step::Rating => Step::Vibe,
            Step::Vibe | Step::Results => Step::Results,
        }
    }

    fn prev(self) -> Step {
        match self {
            Step::Genre | Step::Subgenre => Step::Genre,
            Step::Company => Step::Subgenre,
            Step::Era => Step::Company,
            Step::Rating => Step::Era,
            Step::Vibe => Step::Rating,
            Step::Results => Step::Vibe,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Genre
    }
}

/// A concrete pick for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Genre(Genre),
    Subgenre(SubgenreOption),
    Company(Company),
    Era(Era),
    Rating(RatingTier),
    Vibe(Vibe),
}

impl Answer {
    fn step(&self) -> Step {
        match self {
            Answer::Genre(_) => Step::Genre,
            Answer::Subgenre(_) => Step::Subgenre,
            Answer::Company(_) => Step::Company,
            Answer::Era(_) => Step::Era,
            Answer::Rating(_) => Step::Rating,
            Answer::Vibe(_) => Step::Vibe,
        }
    }
}

#[derive(Debug, Default)]
pub struct Questionnaire {
    step: Step,
    selection: FilterSelection,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Options for the subgenre step; genre-specific when a genre was chosen,
    /// the fixed mood set otherwise.
    pub fn subgenre_options(&self) -> &'static [SubgenreOption] {
        match self.selection.genre {
            Some(genre) => SubgenreOption::options_for(genre),
            None => &SubgenreOption::FALLBACK_MOODS,
        }
    }

    /// Stores a pick for the current step and advances.
    ///
    /// An answer for any other step is ignored; the flow only ever moves one
    /// step at a time.
    pub fn choose(&mut self, answer: Answer) -> Step {
        if answer.step() != self.step {
            tracing::warn!(
                current = ?self.step,
                answered = ?answer.step(),
                "Ignoring answer for a step that is not current"
            );
            return self.step;
        }

        match answer {
            Answer::Genre(genre) => self.selection.genre = Some(genre),
            Answer::Subgenre(subgenre) => self.selection.subgenre = Some(subgenre),
            Answer::Company(company) => self.selection.company = Some(company),
            Answer::Era(era) => self.selection.era = Some(era),
            Answer::Rating(rating) => self.selection.rating = Some(rating),
            Answer::Vibe(vibe) => self.selection.vibe = Some(vibe),
        }

        self.step = self.step.next();
        self.step
    }

    /// Skips the current step, leaving its answer unset
    pub fn skip(&mut self) -> Step {
        if self.step != Step::Results {
            self.step = self.step.next();
        }
        self.step
    }

    /// Moves back one step, clearing that step's answer and every answer
    /// after it (cascading invalidation).
    pub fn back(&mut self) -> Step {
        if self.step == Step::Genre {
            return self.step;
        }

        self.step = self.step.prev();
        self.clear_from(self.step);
        self.step
    }

    /// Resets to the first step and clears everything
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn build_query(&self) -> DiscoveryQuery {
        query_builder::build(&self.selection)
    }

    fn clear_from(&mut self, step: Step) {
        if step <= Step::Genre {
            self.selection.genre = None;
        }
        if step <= Step::Subgenre {
            self.selection.subgenre = None;
        }
        if step <= Step::Company {
            self.selection.company = None;
        }
        if step <= Step::Era {
            self.selection.era = None;
        }
        if step <= Step::Rating {
            self.selection.rating = None;
        }
        if step <= Step::Vibe {
            self.selection.vibe = None;
        }
    }
}

/// Executes the composed query against the catalog.
///
/// An empty genre-id set falls back to the trending feed. Failures and empty
/// result sets both resolve to an empty list; the results step renders an
/// explicit empty state and the user restarts or navigates back.
pub async fn fetch_recommendations(
    catalog: &dyn CatalogProvider,
    selection: &FilterSelection,
) -> Vec<Movie> {
    let query = query_builder::build(selection);

    let result = if query.is_unfiltered() {
        catalog.fetch_trending().await
    } else {
        catalog
            .discover(&query.genre_ids, query.sort_by, &query.extra_params(), 1)
            .await
    };

    match result {
        Ok(mut movies) => {
            movies.truncate(MAX_RESULTS);
            tracing::info!(results = movies.len(), "Recommendations loaded");
            movies
        }
        Err(e) => {
            tracing::warn!(error = %e, "Recommendation fetch failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;

    fn subgenre(genre: Genre, id: &str) -> SubgenreOption {
        *SubgenreOption::options_for(genre)
            .iter()
            .find(|o| o.id == id)
            .unwrap()
    }

    #[test]
    fn test_forward_progression() {
        let mut flow = Questionnaire::new();
        assert_eq!(flow.step(), Step::Genre);

        assert_eq!(flow.choose(Answer::Genre(Genre::Horror)), Step::Subgenre);
        assert_eq!(flow.skip(), Step::Company);
        assert_eq!(flow.choose(Answer::Company(Company::Friends)), Step::Era);
        assert_eq!(flow.skip(), Step::Rating);
        assert_eq!(flow.skip(), Step::Vibe);
        assert_eq!(flow.choose(Answer::Vibe(Vibe::Popular)), Step::Results);

        // Terminal step does not advance further
        assert_eq!(flow.skip(), Step::Results);
    }

    #[test]
    fn test_answer_for_wrong_step_ignored() {
        let mut flow = Questionnaire::new();
        assert_eq!(flow.choose(Answer::Era(Era::Recent)), Step::Genre);
        assert_eq!(flow.selection().era, None);
    }

    #[test]
    fn test_back_clears_current_and_later_answers() {
        let mut flow = Questionnaire::new();
        flow.choose(Answer::Genre(Genre::Horror));
        flow.choose(Answer::Subgenre(subgenre(Genre::Horror, "hor_psych")));
        flow.choose(Answer::Company(Company::Solo));
        flow.choose(Answer::Era(Era::Classics));

        // At Rating; back to Era clears era but keeps earlier answers
        assert_eq!(flow.back(), Step::Era);
        assert_eq!(flow.selection().era, None);
        assert_eq!(flow.selection().company, Some(Company::Solo));
        assert_eq!(flow.selection().genre, Some(Genre::Horror));
    }

    #[test]
    fn test_every_backward_step_leaves_later_fields_unset() {
        let mut flow = Questionnaire::new();
        flow.choose(Answer::Genre(Genre::Comedy));
        flow.choose(Answer::Subgenre(subgenre(Genre::Comedy, "com_dark")));
        flow.choose(Answer::Company(Company::Date));
        flow.choose(Answer::Era(Era::Modern));
        flow.choose(Answer::Rating(RatingTier::Good));
        flow.choose(Answer::Vibe(Vibe::Hidden));
        assert_eq!(flow.step(), Step::Results);

        while flow.step() != Step::Genre {
            flow.back();
            let s = flow.selection();
            let fields = [
                (Step::Genre, s.genre.is_none()),
                (Step::Subgenre, s.subgenre.is_none()),
                (Step::Company, s.company.is_none()),
                (Step::Era, s.era.is_none()),
                (Step::Rating, s.rating.is_none()),
                (Step::Vibe, s.vibe.is_none()),
            ];
            for (step, is_unset) in fields {
                if step >= flow.step() {
                    assert!(is_unset, "{step:?} still set after back to {:?}", flow.step());
                }
            }
        }
        assert_eq!(*flow.selection(), FilterSelection::default());
    }

    #[test]
    fn test_back_at_first_step_is_noop() {
        let mut flow = Questionnaire::new();
        assert_eq!(flow.back(), Step::Genre);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut flow = Questionnaire::new();
        flow.choose(Answer::Genre(Genre::Action));
        flow.skip();
        flow.skip();
        flow.skip();
        flow.skip();
        flow.skip();
        assert_eq!(flow.step(), Step::Results);

        flow.restart();
        assert_eq!(flow.step(), Step::Genre);
        assert_eq!(*flow.selection(), FilterSelection::default());
    }

    #[test]
    fn test_subgenre_options_follow_genre() {
        let mut flow = Questionnaire::new();
        flow.choose(Answer::Genre(Genre::Horror));
        assert!(flow.subgenre_options().iter().any(|o| o.id == "hor_psych"));
    }

    #[test]
    fn test_subgenre_options_fall_back_to_moods() {
        let mut flow = Questionnaire::new();
        flow.skip();
        assert_eq!(flow.subgenre_options(), &SubgenreOption::FALLBACK_MOODS);
    }

    #[tokio::test]
    async fn test_fetch_all_skipped_uses_trending() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_fetch_trending()
            .times(1)
            .returning(|| Ok(vec![Movie::new(Some(1), "Trend", 2024)]));
        catalog.expect_discover().times(0);

        let movies = fetch_recommendations(&catalog, &FilterSelection::default()).await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Trend");
    }

    #[tokio::test]
    async fn test_fetch_with_genres_uses_discover() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover()
            .withf(|genre_ids, sort_by, _, page| {
                genre_ids == [27, 53] && sort_by == "popularity.desc" && *page == 1
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![Movie::new(Some(2), "Scary", 1985)]));
        catalog.expect_fetch_trending().times(0);

        let selection = FilterSelection {
            genre: Some(Genre::Horror),
            subgenre: Some(subgenre(Genre::Horror, "hor_psych")),
            ..Default::default()
        };

        let movies = fetch_recommendations(&catalog, &selection).await;
        assert_eq!(movies.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_resolves_to_empty() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_fetch_trending()
            .returning(|| Err(AppError::CatalogStatus(500)));

        let movies = fetch_recommendations(&catalog, &FilterSelection::default()).await;
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_truncates_to_max_results() {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_fetch_trending().returning(|| {
            Ok((0..25)
                .map(|i| Movie::new(Some(i), format!("Movie {i}"), 2020))
                .collect())
        });

        let movies = fetch_recommendations(&catalog, &FilterSelection::default()).await;
        assert_eq!(movies.len(), MAX_RESULTS);
    }
}
