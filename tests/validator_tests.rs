//! Set validation properties.
//!
//! These tests check the validator against the game's rules over the whole
//! card space rather than hand-picked examples.

use proptest::prelude::*;
use set_game::cards::CardAttributes;
use set_game::rules::{find_sets, is_set, is_set_of, third_card};

fn card(s: &str) -> CardAttributes {
    s.parse().expect("valid card string")
}

fn any_card() -> impl Strategy<Value = CardAttributes> {
    prop::array::uniform4(0usize..3).prop_map(CardAttributes::from_indices)
}

proptest! {
    #[test]
    fn order_does_not_matter(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_set(&a, &b, &c);
        prop_assert_eq!(is_set(&b, &a, &c), expected);
        prop_assert_eq!(is_set(&c, &b, &a), expected);
        prop_assert_eq!(is_set(&a, &c, &b), expected);
        prop_assert_eq!(is_set_of(&[b, c, a]), Ok(expected));
    }

    #[test]
    fn card_with_itself_is_a_set(a in any_card()) {
        prop_assert!(is_set(&a, &a, &a));
    }

    #[test]
    fn third_card_completes_set(a in any_card(), b in any_card()) {
        let c = third_card(&a, &b);
        prop_assert!(is_set(&a, &b, &c));
        prop_assert_eq!(third_card(&b, &a), c);
    }

    #[test]
    fn third_card_is_the_only_completion(a in any_card(), b in any_card()) {
        let completions: Vec<_> = CardAttributes::all()
            .filter(|c| is_set(&a, &b, c))
            .collect();
        prop_assert_eq!(completions, vec![third_card(&a, &b)]);
    }
}

/// Test the reference cases from the rules.
#[test]
fn test_reference_cases() {
    assert!(is_set(
        &card("solid-diamond-green-1"),
        &card("outline-oval-purple-2"),
        &card("striped-squiggle-red-3"),
    ));
    assert!(is_set(
        &card("solid-diamond-green-1"),
        &card("solid-oval-green-2"),
        &card("solid-squiggle-green-3"),
    ));
    assert!(!is_set(
        &card("solid-diamond-green-1"),
        &card("solid-oval-green-2"),
        &card("outline-squiggle-red-3"),
    ));
}

/// Test that the full deck contains the expected number of sets.
///
/// Every pair of distinct cards has exactly one completion, so the 81-card
/// deck holds 81 * 80 / 6 = 1080 sets.
#[test]
fn test_full_deck_set_count() {
    let deck: Vec<_> = CardAttributes::all().collect();
    let sets = find_sets(&deck);
    assert_eq!(sets.len(), 1080);

    for [i, j, k] in sets {
        assert!(i < j && j < k);
        assert!(is_set(&deck[i], &deck[j], &deck[k]));
    }
}
