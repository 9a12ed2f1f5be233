//! Canonical venue and filter-state types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default budget ceiling in whole currency units per person.
pub const DEFAULT_BUDGET_CEILING: u32 = 25;

/// A canonical, normalized venue record.
///
/// Produced once by the feed normalizer and treated as immutable afterwards.
/// Every venue admitted to a working set has a non-empty `name` and
/// `venue_type`; the normalizer drops rows that cannot satisfy that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Feed-assigned ID, when the source provides one.
    pub id: Option<String>,
    pub name: String,
    /// Category, e.g. "Cafe" or "Bar".
    pub venue_type: String,
    pub city: Option<String>,
    pub address: Option<String>,
    /// Average price per person. `None` means unconstrained by budget.
    pub price_avg: Option<f64>,
    /// Lowercase, trimmed vibe tags with duplicates collapsed.
    pub vibes: Vec<String>,
    /// Deep link to a map search, when the source provides one.
    pub map_url: Option<String>,
    /// Raw image reference; resolved lazily by the image resolver.
    pub image_url: Option<String>,
}

impl Venue {
    /// Identity key: the feed ID when present, the name otherwise.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Whether the venue carries `tag`. Tags are stored lowercased, so the
    /// caller is expected to pass a lowercase tag.
    #[must_use]
    pub fn has_vibe(&self, tag: &str) -> bool {
        self.vibes.iter().any(|v| v == tag)
    }
}

/// The user's current filter choices.
///
/// Owned and mutated by the presentation layer only; the ranking engine and
/// the URL codec just read it. Hydrated once from the initial query string,
/// then changed exclusively by user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_vibes: BTreeSet<String>,
    pub selected_types: BTreeSet<String>,
    /// Maximum acceptable per-person price.
    pub budget_ceiling: u32,
    /// Gates whether ranking results are exposed at all.
    pub submitted: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_vibes: BTreeSet::new(),
            selected_types: BTreeSet::new(),
            budget_ceiling: DEFAULT_BUDGET_CEILING,
            submitted: false,
        }
    }
}

impl FilterState {
    /// Toggle membership of `tag` in the selected vibe set.
    pub fn toggle_vibe(&mut self, tag: &str) {
        if !self.selected_vibes.remove(tag) {
            self.selected_vibes.insert(tag.to_string());
        }
    }

    /// Toggle membership of `category` in the selected type set.
    pub fn toggle_type(&mut self, category: &str) {
        if !self.selected_types.remove(category) {
            self.selected_types.insert(category.to_string());
        }
    }
}

/// Derived display vocabularies: every vibe tag and every category present
/// in the working set, sorted. Callers fall back to their own defaults when
/// the feed yields an empty vocabulary.
#[must_use]
pub fn vocabularies(venues: &[Venue]) -> (Vec<String>, Vec<String>) {
    let mut vibes = BTreeSet::new();
    let mut types = BTreeSet::new();
    for venue in venues {
        for tag in &venue.vibes {
            vibes.insert(tag.clone());
        }
        types.insert(venue.venue_type.clone());
    }
    (vibes.into_iter().collect(), types.into_iter().collect())
}
