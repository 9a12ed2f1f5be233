//! Outbound map links for venues.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use gemfind_core::Venue;

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Deep link to a map for one venue.
///
/// The venue's own `map_url` wins when the feed provides one; otherwise a
/// map search is synthesized from the address, falling back to
/// `"<name> <city>"` (or just the name when no city is known). The search
/// text is percent-encoded as a single query parameter.
#[must_use]
pub fn map_url(venue: &Venue) -> String {
    if let Some(url) = &venue.map_url {
        return url.clone();
    }

    let query = match (&venue.address, &venue.city) {
        (Some(address), _) => address.clone(),
        (None, Some(city)) => format!("{} {}", venue.name, city),
        (None, None) => venue.name.clone(),
    };

    format!(
        "{MAPS_SEARCH_BASE}{}",
        utf8_percent_encode(&query, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(map_url: Option<&str>, address: Option<&str>, city: Option<&str>) -> Venue {
        Venue {
            id: None,
            name: "Cafe X".to_string(),
            venue_type: "Cafe".to_string(),
            city: city.map(str::to_string),
            address: address.map(str::to_string),
            price_avg: None,
            vibes: Vec::new(),
            map_url: map_url.map(str::to_string),
            image_url: None,
        }
    }

    #[test]
    fn feed_map_url_wins() {
        let v = venue(Some("https://maps.example.com/x"), Some("12 Main St"), None);
        assert_eq!(map_url(&v), "https://maps.example.com/x");
    }

    #[test]
    fn address_synthesizes_a_search_link() {
        let v = venue(None, Some("12 Main St, Springfield"), Some("Springfield"));
        assert_eq!(
            map_url(&v),
            "https://www.google.com/maps/search/?api=1&query=12%20Main%20St%2C%20Springfield"
        );
    }

    #[test]
    fn name_and_city_fall_back_when_no_address() {
        let v = venue(None, None, Some("Springfield"));
        assert_eq!(
            map_url(&v),
            "https://www.google.com/maps/search/?api=1&query=Cafe%20X%20Springfield"
        );
    }

    #[test]
    fn bare_name_falls_back_when_nothing_else_is_known() {
        let v = venue(None, None, None);
        assert_eq!(
            map_url(&v),
            "https://www.google.com/maps/search/?api=1&query=Cafe%20X"
        );
    }
}
