use gemfind_core::DEFAULT_BUDGET_CEILING;

use super::*;

fn state(vibes: &[&str], types: &[&str], budget: u32, submitted: bool) -> FilterState {
    FilterState {
        selected_vibes: vibes.iter().map(|v| (*v).to_string()).collect(),
        selected_types: types.iter().map(|t| (*t).to_string()).collect(),
        budget_ceiling: budget,
        submitted,
    }
}

// -----------------------------------------------------------------------
// encode
// -----------------------------------------------------------------------

#[test]
fn default_state_encodes_to_empty() {
    assert_eq!(encode(&FilterState::default()), "");
}

#[test]
fn full_state_encodes_all_four_keys_in_order() {
    let s = state(&["cozy", "quiet"], &["Bar", "Cafe"], 40, true);
    assert_eq!(encode(&s), "v=cozy,quiet&t=Bar|Cafe&b=40&go=1");
}

#[test]
fn default_budget_is_omitted() {
    let s = state(&["cozy"], &[], DEFAULT_BUDGET_CEILING, false);
    assert_eq!(encode(&s), "v=cozy");
}

#[test]
fn tag_content_is_percent_encoded() {
    let s = state(&["late-night"], &["Wine Bar"], DEFAULT_BUDGET_CEILING, false);
    let encoded = encode(&s);
    assert!(encoded.contains("late%2Dnight"), "{encoded}");
    assert!(encoded.contains("Wine%20Bar"), "{encoded}");
}

// -----------------------------------------------------------------------
// decode
// -----------------------------------------------------------------------

#[test]
fn decode_applies_all_four_keys() {
    let mut s = FilterState::default();
    decode("v=cozy,quiet&t=Bar|Cafe&b=40&go=1", &mut s);
    assert_eq!(s, state(&["cozy", "quiet"], &["Bar", "Cafe"], 40, true));
}

#[test]
fn decode_tolerates_a_leading_question_mark() {
    let mut s = FilterState::default();
    decode("?v=cozy", &mut s);
    assert!(s.selected_vibes.contains("cozy"));
}

#[test]
fn absent_keys_leave_prior_values() {
    let mut s = state(&["cozy"], &["Cafe"], 40, true);
    decode("b=60", &mut s);
    assert_eq!(s, state(&["cozy"], &["Cafe"], 60, true));
}

#[test]
fn empty_lists_do_not_overwrite() {
    let mut s = state(&["cozy"], &[], 40, false);
    decode("v=&t=", &mut s);
    assert!(s.selected_vibes.contains("cozy"));
}

#[test]
fn invalid_budget_is_ignored() {
    let mut s = FilterState::default();
    decode("b=soon", &mut s);
    assert_eq!(s.budget_ceiling, DEFAULT_BUDGET_CEILING);
    decode("b=0", &mut s);
    assert_eq!(s.budget_ceiling, DEFAULT_BUDGET_CEILING);
}

#[test]
fn go_only_flips_submitted_on() {
    let mut s = state(&[], &[], DEFAULT_BUDGET_CEILING, true);
    decode("go=0", &mut s);
    assert!(s.submitted, "go never un-submits");
}

#[test]
fn unknown_keys_are_ignored() {
    let mut s = FilterState::default();
    decode("utm_source=share&v=cozy", &mut s);
    assert!(s.selected_vibes.contains("cozy"));
}

#[test]
fn plus_decodes_as_space() {
    let mut s = FilterState::default();
    decode("t=Wine+Bar", &mut s);
    assert!(s.selected_types.contains("Wine Bar"));
}

// -----------------------------------------------------------------------
// round trip
// -----------------------------------------------------------------------

#[test]
fn round_trip_reproduces_the_state() {
    let cases = vec![
        FilterState::default(),
        state(&["cozy"], &[], DEFAULT_BUDGET_CEILING, false),
        state(&["cozy", "late-night"], &["Bar"], 40, true),
        state(&[], &["Wine Bar", "Cafe"], 5, true),
    ];
    for original in cases {
        let mut decoded = FilterState::default();
        decode(&encode(&original), &mut decoded);
        assert_eq!(decoded, original, "query: {}", encode(&original));
    }
}
