//! Schema normalization from raw feed rows to [`Venue`] records.
//!
//! Feed columns are resolved through an explicit alias table rather than
//! exact header matches: every spreadsheet that has fed this pipeline spelt
//! at least one header differently ("Price per person", "image link",
//! "Google Maps"). Resolution goes through a case- and
//! punctuation-insensitive index of the row's actual keys, so `Image URL`,
//! `image_url`, and `imageUrl` all land on the same canonical field.

use std::collections::{HashMap, HashSet};

use gemfind_core::Venue;

use crate::tabular::RawRow;

/// Canonical field → ordered list of accepted header spellings.
///
/// Spellings are matched through [`normalize_key`], so entries that only
/// differ in case or punctuation are listed once.
const ALIASES: &[(&str, &[&str])] = &[
    ("id", &["id", "venue id"]),
    ("name", &["name", "venue"]),
    ("type", &["type", "category", "kind"]),
    ("city", &["city", "town"]),
    ("address", &["address", "location"]),
    (
        "price",
        &["price avg", "price", "avg price", "price per person", "pp"],
    ),
    ("vibes", &["vibes", "vibe", "tags"]),
    (
        "image",
        &["image", "image url", "image link", "img", "photo", "cover"],
    ),
    ("map", &["map url", "maps link", "google maps"]),
];

/// Normalize raw rows into the canonical venue working set.
///
/// Rows that resolve to an empty `name` or `type` are dropped silently.
/// Venues are deduplicated by case-insensitive name: the later row wins
/// entirely (no field-level merge), keeping the earlier row's position so
/// an edited re-upload does not shuffle the set.
#[must_use]
pub fn normalize(rows: &[RawRow]) -> Vec<Venue> {
    let mut venues: Vec<Venue> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let Some(venue) = normalize_row(row) else {
            continue;
        };
        let key = venue.name.to_lowercase();
        match index_by_name.get(&key) {
            Some(&idx) => venues[idx] = venue,
            None => {
                index_by_name.insert(key, venues.len());
                venues.push(venue);
            }
        }
    }

    tracing::debug!(
        raw = rows.len(),
        kept = venues.len(),
        "normalized feed rows"
    );
    venues
}

fn normalize_row(row: &RawRow) -> Option<Venue> {
    let fields = FieldIndex::new(row);

    let name = fields.get("name").map(str::trim).unwrap_or_default();
    let venue_type = fields.get("type").map(str::trim).unwrap_or_default();
    if name.is_empty() || venue_type.is_empty() {
        return None;
    }

    Some(Venue {
        id: fields.get_non_empty("id"),
        name: name.to_string(),
        venue_type: venue_type.to_string(),
        city: fields.get_non_empty("city"),
        address: fields.get_non_empty("address"),
        price_avg: fields.get("price").and_then(coerce_price),
        vibes: fields.get("vibes").map(split_tags).unwrap_or_default(),
        map_url: fields.get_non_empty("map"),
        image_url: fields.get_non_empty("image"),
    })
}

/// Case/punctuation-insensitive view over one row's keys.
struct FieldIndex<'a> {
    by_normalized_key: HashMap<String, &'a str>,
}

impl<'a> FieldIndex<'a> {
    fn new(row: &'a RawRow) -> Self {
        let by_normalized_key = row
            .iter()
            .map(|(key, value)| (normalize_key(key), value.as_str()))
            .collect();
        Self { by_normalized_key }
    }

    /// Resolve a canonical field through its alias list; first match wins.
    fn get(&self, field: &str) -> Option<&'a str> {
        let (_, aliases) = ALIASES.iter().find(|(name, _)| *name == field)?;
        aliases
            .iter()
            .find_map(|alias| self.by_normalized_key.get(&normalize_key(alias)).copied())
    }

    fn get_non_empty(&self, field: &str) -> Option<String> {
        let value = self.get(field)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Strip everything that is not alphanumeric and lowercase the rest, so
/// `"Price_Avg"`, `"price avg"`, and `"priceAvg"` all compare equal.
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Coerce a price cell to a number.
///
/// Strips every character that is not a digit or decimal point before
/// parsing, so `"$12.50"` and `"~ 12 USD"` both work. Empty or unparseable
/// input is absent, never zero.
fn coerce_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Split a raw tag cell on `|`, `,`, or `/`; trim, lowercase, drop empties,
/// collapse duplicates while keeping first-seen order.
fn split_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(['|', ',', '/'])
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
