//! Filter-state ⇄ query-string codec.
//!
//! Four keys make a shareable URL: `v` (comma-joined vibes), `t`
//! (pipe-joined types), `b` (integer budget), `go` (literal `1` when
//! results are submitted). Keys at their empty/default value are omitted
//! entirely, so a fresh state encodes to the empty string. Decode applies
//! only the keys present, leaving absent fields at their prior value — it
//! runs once against the initial URL and never overwrites with empties.

use std::collections::BTreeSet;

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use gemfind_core::{FilterState, DEFAULT_BUDGET_CEILING};

/// Encode filter state as a query string (no leading `?`).
///
/// List elements are percent-encoded individually and joined with the
/// literal delimiter, so a tag containing the delimiter character cannot
/// corrupt the list shape.
#[must_use]
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !state.selected_vibes.is_empty() {
        pairs.push(format!("v={}", join_encoded(&state.selected_vibes, ",")));
    }
    if !state.selected_types.is_empty() {
        pairs.push(format!("t={}", join_encoded(&state.selected_types, "|")));
    }
    if state.budget_ceiling != DEFAULT_BUDGET_CEILING {
        pairs.push(format!("b={}", state.budget_ceiling));
    }
    if state.submitted {
        pairs.push("go=1".to_string());
    }

    pairs.join("&")
}

/// Hydrate filter state from a query string (leading `?` tolerated).
///
/// Invalid values are ignored field-by-field: a non-numeric or
/// non-positive budget leaves the prior ceiling, and `go` only ever flips
/// `submitted` on, matching how the original state is hydrated.
pub fn decode(query: &str, state: &mut FilterState) {
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "v" => {
                let vibes = split_decoded(value, ',');
                if !vibes.is_empty() {
                    state.selected_vibes = vibes;
                }
            }
            "t" => {
                let types = split_decoded(value, '|');
                if !types.is_empty() {
                    state.selected_types = types;
                }
            }
            "b" => {
                if let Ok(budget) = decode_component(value).parse::<u32>() {
                    if budget > 0 {
                        state.budget_ceiling = budget;
                    }
                }
            }
            "go" => {
                if decode_component(value) == "1" {
                    state.submitted = true;
                }
            }
            _ => {}
        }
    }
}

fn join_encoded(items: &BTreeSet<String>, separator: &str) -> String {
    items
        .iter()
        .map(|item| utf8_percent_encode(item, NON_ALPHANUMERIC).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn split_decoded(value: &str, separator: char) -> BTreeSet<String> {
    value
        .split(separator)
        .map(decode_component)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Percent-decode one query component, treating `+` as a space.
fn decode_component(value: &str) -> String {
    let plus_normalized = value.replace('+', " ");
    percent_decode_str(&plus_normalized)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
