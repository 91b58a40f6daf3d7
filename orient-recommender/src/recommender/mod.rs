//! `Recommender` implementation.

use std::cmp::Ordering;

use orient_core::{DEFAULT_TOP_K, Program, Recommendation, Scorer, StudentProfile};
use orient_scorer::FitnessScorer;

/// Ranks catalog programs for a learner using a [`Scorer`].
///
/// The recommender is generic over the scorer so tests and alternative
/// policies can plug in without touching the ranking rules.
#[derive(Debug, Clone, Default)]
pub struct Recommender<S = FitnessScorer>
where
    S: Scorer,
{
    scorer: S,
}

impl<S> Recommender<S>
where
    S: Scorer,
{
    /// Construct a recommender around `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Borrow the scorer.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Return at most `top_k` programs ordered by descending score.
    ///
    /// Programs with equal scores keep their relative catalog order. The
    /// result holds `min(top_k, catalog.len())` entries; a `top_k` of zero or
    /// an empty catalog yields an empty result.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        profile: &StudentProfile,
        catalog: &'a [Program],
        top_k: usize,
    ) -> Vec<Recommendation<'a>> {
        if top_k == 0 || catalog.is_empty() {
            return Vec::new();
        }
        let mut ranked = self.rank(profile, catalog);
        ranked.truncate(top_k);
        log::debug!(
            "ranked {} programs for {}, returning {}",
            catalog.len(),
            profile.name(),
            ranked.len()
        );
        ranked
    }

    /// Shorthand for [`recommend`](Self::recommend) with [`DEFAULT_TOP_K`].
    #[must_use]
    pub fn recommend_default<'a>(
        &self,
        profile: &StudentProfile,
        catalog: &'a [Program],
    ) -> Vec<Recommendation<'a>> {
        self.recommend(profile, catalog, DEFAULT_TOP_K)
    }

    /// Score and order the whole catalog without truncation.
    #[must_use]
    pub fn rank<'a>(
        &self,
        profile: &StudentProfile,
        catalog: &'a [Program],
    ) -> Vec<Recommendation<'a>> {
        let mut scored: Vec<Recommendation<'a>> = catalog
            .iter()
            .map(|program| {
                let score = S::sanitise(self.scorer.score(profile, program));
                log::trace!("program {} scored {score:.3}", program.id());
                Recommendation::new(program, score)
            })
            .collect();

        // `sort_by` is stable; ties keep catalog order.
        scored.sort_by(|lhs, rhs| {
            rhs.score
                .partial_cmp(&lhs.score)
                .unwrap_or(Ordering::Equal)
        });
        scored
    }
}

/// Rank `catalog` for `profile` with the default [`FitnessScorer`].
///
/// # Examples
/// ```
/// use orient_core::StudentProfile;
///
/// let ranked = orient_recommender::recommend(&StudentProfile::new("Zoe"), &[], 3);
/// assert!(ranked.is_empty());
/// ```
#[must_use]
pub fn recommend<'a>(
    profile: &StudentProfile,
    catalog: &'a [Program],
    top_k: usize,
) -> Vec<Recommendation<'a>> {
    Recommender::new(FitnessScorer).recommend(profile, catalog, top_k)
}
