//! Ranking and filter-state plumbing for gemfind.
//!
//! The engine is a pure function from `(venues, filter state)` to a scored,
//! thresholded, capped result list — safe to call on every slider tick.
//! Alongside it live the query-string codec that makes filter state
//! shareable as a URL, the debounced writer that keeps the URL in sync
//! without flooding history, and outbound map-link construction.

pub mod debounce;
pub mod engine;
pub mod maplink;
pub mod query;

pub use debounce::{LocationSink, UrlSync};
pub use engine::{
    rank, score, RankParams, ScoredVenue, DEFAULT_RESULT_CAP, DEFAULT_SCORE_THRESHOLD,
};
pub use maplink::map_url;
pub use query::{decode, encode};
