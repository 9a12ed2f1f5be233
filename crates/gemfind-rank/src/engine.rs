//! Weighted multi-criteria scoring over the venue working set.

use gemfind_core::{FilterState, Venue};

/// Conservative default for the ranked-result cap. Deployments wanting the
/// larger grid configure 12 instead of hard-coding it.
pub const DEFAULT_RESULT_CAP: usize = 6;

/// Venues scoring below this never appear in results, regardless of how
/// few results remain.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.40;

// Criterion weights in percent. Sub-scores only take the values 0, ½, and
// 1, so the composite is computed in integer half-percent units: float
// accumulation drifts 0.575 just below the representable value and would
// round the worked-example score to 0.57 instead of 0.58.
const VIBE_WEIGHT_PCT: u32 = 60;
const TYPE_WEIGHT_PCT: u32 = 25;
const BUDGET_WEIGHT_PCT: u32 = 15;

/// Tunables for [`rank`], sourced from `AppConfig` in the application.
#[derive(Debug, Clone, Copy)]
pub struct RankParams {
    pub cap: usize,
    pub threshold: f64,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            cap: DEFAULT_RESULT_CAP,
            threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

/// A venue paired with its fit score, `[0, 1]` rounded to 2 decimals.
/// Ephemeral: recomputed on every filter change, never cached.
#[derive(Debug, Clone, Copy)]
pub struct ScoredVenue<'a> {
    pub venue: &'a Venue,
    pub score: f64,
}

/// Compute the weighted fit score for one venue against the filter state.
///
/// Sub-scores, each in `[0, 1]`:
/// - vibe: half credit for one matching tag, full credit for two or more;
/// - type: `0.5` when no categories are selected (no opinion), otherwise
///   membership in the selected set (inclusive-OR);
/// - budget: `1` when the venue has no price or fits the ceiling, else `0`.
///
/// Pure and deterministic; the result is rounded to 2 decimals.
#[must_use]
pub fn score(venue: &Venue, filters: &FilterState) -> f64 {
    // Each sub-score in half units: 0, 1 (= ½), or 2 (= 1).
    let matching_vibes = filters
        .selected_vibes
        .iter()
        .filter(|tag| venue.has_vibe(tag))
        .count();
    let vibe_halves: u32 = match matching_vibes {
        0 => 0,
        1 => 1,
        _ => 2,
    };

    let type_halves: u32 = if filters.selected_types.is_empty() {
        1
    } else if filters.selected_types.contains(&venue.venue_type) {
        2
    } else {
        0
    };

    let budget_halves: u32 = match venue.price_avg {
        Some(price) if price > f64::from(filters.budget_ceiling) => 0,
        _ => 2,
    };

    let half_pct = VIBE_WEIGHT_PCT * vibe_halves
        + TYPE_WEIGHT_PCT * type_halves
        + BUDGET_WEIGHT_PCT * budget_halves;
    // Half-up rounding to whole percent, then back to [0, 1].
    f64::from((half_pct + 1) / 2) / 100.0
}

/// Score, threshold, sort, and cap the working set.
///
/// The sort is stable and descending by score, so equally-scored venues
/// keep their input order and a no-op filter change does not shuffle them.
/// Gating on `filters.submitted` is the caller's concern; the engine
/// always ranks.
#[must_use]
pub fn rank<'a>(
    venues: &'a [Venue],
    filters: &FilterState,
    params: &RankParams,
) -> Vec<ScoredVenue<'a>> {
    let mut scored: Vec<ScoredVenue<'a>> = venues
        .iter()
        .map(|venue| ScoredVenue {
            venue,
            score: score(venue, filters),
        })
        .filter(|entry| entry.score >= params.threshold)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(params.cap);
    scored
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
