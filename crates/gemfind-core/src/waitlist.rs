//! Waitlist capture state over an injected [`KvStore`].
//!
//! The capture UI itself lives outside this crate; what lives here is the
//! state it shares across sessions: a permanent "joined" flag, a
//! snooze-until timestamp for "not now" dismissals, and the set of saved
//! venue ids.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::kv::KvStore;

pub const KEY_JOINED: &str = "gf_waitlisted";
pub const KEY_HIDDEN_UNTIL: &str = "gf_waitlist_hidden_until";
pub const KEY_SAVED: &str = "gf_saved";

/// Default snooze length for "not now" dismissals, in days.
pub const SNOOZE_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum WaitlistError {
    /// Malformed email; submission is blocked locally, nothing is sent.
    #[error("invalid email address")]
    InvalidEmail,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Validate an email address before submission.
///
/// Intentionally loose: one `@`-separated pair with a dotted domain, no
/// whitespace. Deliverability is not checked.
///
/// # Errors
///
/// Returns [`WaitlistError::InvalidEmail`] when the shape does not match.
pub fn validate_email(email: &str) -> Result<(), WaitlistError> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(WaitlistError::InvalidEmail)
    }
}

/// Whether this user has already joined the waitlist.
#[must_use]
pub fn has_joined(store: &dyn KvStore) -> bool {
    store.get(KEY_JOINED).as_deref() == Some("1")
}

/// Record that this user joined; survives across sessions.
pub fn mark_joined(store: &dyn KvStore) {
    store.set(KEY_JOINED, "1");
}

/// Hide the capture prompt until `days` from `now`.
pub fn snooze_for_days(store: &dyn KvStore, days: i64, now: DateTime<Utc>) {
    let until_ms = now.timestamp_millis() + days * 24 * 60 * 60 * 1000;
    store.set(KEY_HIDDEN_UNTIL, &until_ms.to_string());
}

/// Whether the capture prompt is currently snoozed.
///
/// A missing or unparseable timestamp counts as not snoozed.
#[must_use]
pub fn is_snoozed(store: &dyn KvStore, now: DateTime<Utc>) -> bool {
    store
        .get(KEY_HIDDEN_UNTIL)
        .and_then(|raw| raw.parse::<i64>().ok())
        .is_some_and(|until_ms| now.timestamp_millis() < until_ms)
}

/// The saved venue id set, decoded from its stored JSON-array form.
///
/// Missing or corrupt storage decodes to the empty set.
#[must_use]
pub fn saved_ids(store: &dyn KvStore) -> BTreeSet<String> {
    store
        .get(KEY_SAVED)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Add a venue id to the saved set.
pub fn save_id(store: &dyn KvStore, id: &str) {
    let mut ids = saved_ids(store);
    ids.insert(id.to_string());
    if let Ok(encoded) = serde_json::to_string(&ids) {
        store.set(KEY_SAVED, &encoded);
    }
}

/// Whether a venue id is in the saved set.
#[must_use]
pub fn is_saved(store: &dyn KvStore, id: &str) -> bool {
    saved_ids(store).contains(id)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn valid_email_passes() {
        assert!(validate_email("you@email.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn invalid_emails_are_rejected() {
        for bad in ["", "plainaddress", "no@dot", "two@@x.com", "sp ace@x.com"] {
            assert!(validate_email(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn joined_flag_round_trips() {
        let store = MemoryStore::new();
        assert!(!has_joined(&store));
        mark_joined(&store);
        assert!(has_joined(&store));
    }

    #[test]
    fn snooze_expires() {
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        snooze_for_days(&store, SNOOZE_DAYS, now);

        assert!(is_snoozed(&store, now));
        let later = now + chrono::Duration::days(SNOOZE_DAYS + 1);
        assert!(!is_snoozed(&store, later));
    }

    #[test]
    fn corrupt_snooze_timestamp_counts_as_not_snoozed() {
        let store = MemoryStore::new();
        store.set(KEY_HIDDEN_UNTIL, "next tuesday");
        assert!(!is_snoozed(&store, Utc::now()));
    }

    #[test]
    fn saved_ids_accumulate_without_duplicates() {
        let store = MemoryStore::new();
        assert!(saved_ids(&store).is_empty());

        save_id(&store, "v1");
        save_id(&store, "v2");
        save_id(&store, "v1");

        let ids = saved_ids(&store);
        assert_eq!(ids.len(), 2);
        assert!(is_saved(&store, "v1"));
        assert!(!is_saved(&store, "v3"));
    }

    #[test]
    fn corrupt_saved_set_decodes_to_empty() {
        let store = MemoryStore::new();
        store.set(KEY_SAVED, "{not json");
        assert!(saved_ids(&store).is_empty());
    }
}
