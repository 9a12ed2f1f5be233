//! One-shot HTTP client for the venue feed.
//!
//! Exactly one fetch attempt per load: the feed is the single source of
//! truth for a page load, and a failed load degrades to an empty working
//! set rather than retrying. The body format is sniffed, not configured —
//! a leading `[` or `{` means JSON, anything else goes to the tabular
//! parser.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::FeedError;
use crate::tabular::{self, RawRow};

/// HTTP client for the configured feed location.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the feed and parses it into raw rows, in one attempt.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] — network or TLS failure.
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx response.
    /// - [`FeedError::Json`] — body looked like JSON but failed to parse.
    /// - [`FeedError::UnexpectedJsonShape`] — valid JSON of the wrong shape.
    pub async fn load(&self, url: &str) -> Result<Vec<RawRow>, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "fetched feed body");
        parse_body(&body)
    }
}

/// Sniff the body format and hand it to the matching parser.
pub(crate) fn parse_body(body: &str) -> Result<Vec<RawRow>, FeedError> {
    match body.trim_start().chars().next() {
        Some('[' | '{') => parse_json_rows(body),
        _ => Ok(tabular::parse(body)),
    }
}

/// Parse a JSON feed: an array of row-like objects, or an object wrapping
/// one under `data`.
fn parse_json_rows(body: &str) -> Result<Vec<RawRow>, FeedError> {
    let value: Value = serde_json::from_str(body).map_err(|source| FeedError::Json { source })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Err(FeedError::UnexpectedJsonShape),
        },
        _ => return Err(FeedError::UnexpectedJsonShape),
    };

    Ok(items.into_iter().filter_map(row_from_object).collect())
}

/// Flatten one row-like JSON object into string fields.
///
/// Scalars are stringified; an array of scalars joins with `|` so the
/// normalizer's tag splitting sees it the same way as a delimited cell.
/// Nulls, nested objects, and non-object items are skipped.
fn row_from_object(item: Value) -> Option<RawRow> {
    let Value::Object(map) = item else {
        return None;
    };

    let mut row = RawRow::new();
    for (key, value) in map {
        let rendered = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                parts.join("|")
            }
            Value::Null | Value::Object(_) => continue,
        };
        row.insert(key, rendered);
    }
    Some(row)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
