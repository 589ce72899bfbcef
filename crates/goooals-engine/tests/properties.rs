//! Property checks for range sampling and number re-randomization.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use goooals_core::text::digit_runs;
use goooals_engine::randomize::{BATCH_JITTER, SINGLE_ITEM_JITTER, randomize_numbers};
use goooals_engine::template::sample_range;

fn numbers(text: &str) -> Vec<u64> {
    digit_runs(text)
        .map(|r| text[r].parse().unwrap_or(u64::MAX))
        .collect()
}

proptest! {
    #[test]
    fn sampled_values_stay_on_the_lattice(
        min in -10_000i64..10_000,
        span in 0i64..10_000,
        step in 1i64..500,
        seed in any::<u64>(),
    ) {
        let max = min + span;
        let mut rng = StdRng::seed_from_u64(seed);
        let v = sample_range(Some(min), Some(max), Some(step), &mut rng);
        let v = v.expect("valid range must sample");
        prop_assert!(min <= v && v <= max);
        prop_assert_eq!((v - min) % step, 0);
    }

    #[test]
    fn invalid_ranges_never_sample(
        min in -1_000i64..1_000,
        max in -1_000i64..1_000,
        step in -5i64..5,
        drop in 0u8..4,
        seed in any::<u64>(),
    ) {
        prop_assume!(step <= 0 || min > max || drop < 3);
        let mut rng = StdRng::seed_from_u64(seed);
        let (a, b, c) = match drop {
            0 => (None, Some(max), Some(step)),
            1 => (Some(min), None, Some(step)),
            2 => (Some(min), Some(max), None),
            _ => (Some(min), Some(max), Some(step)),
        };
        prop_assert_eq!(sample_range(a, b, c, &mut rng), None);
    }

    #[test]
    fn every_number_changes_and_stays_positive(
        parts in prop::collection::vec(
            ("[a-z ,.]{0,6}", prop_oneof![0u64..3, 0u64..1_000_000]),
            1..6,
        ),
        tail in "[a-z ]{0,6}",
        batch in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut text = String::new();
        for (words, n) in &parts {
            text.push_str(words);
            text.push(' ');
            text.push_str(&n.to_string());
            text.push(' ');
        }
        text.push_str(&tail);

        let jitter = if batch { BATCH_JITTER } else { SINGLE_ITEM_JITTER };
        let mut rng = StdRng::seed_from_u64(seed);
        let result = randomize_numbers(&text, jitter, &mut rng);

        prop_assert!(result.changed);
        let before = numbers(&text);
        let after = numbers(&result.text);
        prop_assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(&after) {
            prop_assert_ne!(old, new);
            prop_assert!(*new > 0);
        }
    }

    #[test]
    fn digit_free_text_is_returned_verbatim(text in "[^0-9]{0,40}", seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = randomize_numbers(&text, SINGLE_ITEM_JITTER, &mut rng);
        prop_assert!(!result.changed);
        prop_assert_eq!(result.text, text);
    }
}
