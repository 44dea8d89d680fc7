use asoscreen::screening::{is_valid_hit, substitution_distance, INCOMPARABLE};
use proptest::prelude::*;

fn base() -> impl Strategy<Value = u8> {
    prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')]
}

fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..40).prop_flat_map(|len| {
        (
            proptest::collection::vec(base(), len),
            proptest::collection::vec(base(), len),
        )
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric((a, b) in equal_length_pair()) {
        prop_assert_eq!(substitution_distance(&a, &b), substitution_distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero(a in proptest::collection::vec(base(), 0..40)) {
        prop_assert_eq!(substitution_distance(&a, &a), 0);
        let lower = a.to_ascii_lowercase();
        prop_assert_eq!(substitution_distance(&a, &lower), 0);
    }

    #[test]
    fn distance_is_bounded((a, b) in equal_length_pair()) {
        let distance = substitution_distance(&a, &b);
        prop_assert!(distance >= 0);
        prop_assert!(distance as usize <= a.len());
    }

    #[test]
    fn unequal_lengths_are_incomparable(
        a in proptest::collection::vec(base(), 0..40),
        b in proptest::collection::vec(base(), 0..40),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert_eq!(substitution_distance(&a, &b), INCOMPARABLE);
        prop_assert!(!is_valid_hit(substitution_distance(&a, &b), u32::MAX));
    }
}
