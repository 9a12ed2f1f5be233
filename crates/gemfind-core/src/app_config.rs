use std::path::PathBuf;

/// Runtime configuration for the gemfind pipeline, loaded from env vars.
#[derive(Clone)]
pub struct AppConfig {
    /// Location of the venue feed (published-sheet CSV or JSON export).
    pub feed_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Maximum number of ranked results returned per query.
    pub result_cap: usize,
    /// Minimum admissible score; venues below it never appear.
    pub score_threshold: f64,
    /// Trailing delay for the debounced URL write, in milliseconds.
    pub url_debounce_ms: u64,
    /// Path of the file-backed key-value store.
    pub store_path: PathBuf,
}

// Published-sheet URLs carry an unguessable document token, so the feed URL
// is treated like a credential in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("result_cap", &self.result_cap)
            .field("score_threshold", &self.score_threshold)
            .field("url_debounce_ms", &self.url_debounce_ms)
            .field("store_path", &self.store_path)
            .finish()
    }
}
