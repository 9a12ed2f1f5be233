use thiserror::Error;

/// Errors from the one-shot feed load.
///
/// Every variant is the same user-visible condition — the feed data is
/// unavailable for this page load — with the underlying cause attached for
/// diagnostics. There is no retry and no partial-result recovery; callers
/// degrade to an empty working set.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed unavailable: HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed unavailable: unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("feed unavailable: malformed JSON body: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("feed unavailable: JSON body is neither an array of rows nor a data-wrapped object")]
    UnexpectedJsonShape,
}
