//! Placeholder resolution for goal item descriptions.

use rand::Rng;

use goooals_core::display::NOT_SPECIFIED;
use goooals_core::models::goal_item::{GoalItem, Quantify};

const VALUE_TOKEN: &str = "{value}";
const UNIT_TOKEN: &str = "{unit}";
const DEFAULT_UNIT: &str = "units";

/// Pick one value uniformly from `{min, min+step, ..., <= max}`.
///
/// Returns `None` when any bound is missing, `step <= 0` or `min > max`.
pub fn sample_range<R: Rng + ?Sized>(
    min: Option<i64>,
    max: Option<i64>,
    step: Option<i64>,
    rng: &mut R,
) -> Option<i64> {
    let (min, max, step) = (min?, max?, step?);
    if step <= 0 || min > max {
        return None;
    }

    // i128 so that extreme bounds cannot overflow the lattice arithmetic.
    let count = (i128::from(max) - i128::from(min)) / i128::from(step) + 1;
    let index = rng.gen_range(0..count);
    i64::try_from(i128::from(min) + index * i128::from(step)).ok()
}

/// Produce display text for a description and its optional quantification.
///
/// A `{value}`/`{unit}` pair is substituted only when the range has both
/// bounds; only the first occurrence of each token is replaced.
pub fn resolve_description<R: Rng + ?Sized>(
    description: Option<&str>,
    quantify: Option<&Quantify>,
    rng: &mut R,
) -> String {
    let Some(description) = description.filter(|d| !d.is_empty()) else {
        return NOT_SPECIFIED.to_string();
    };

    if let Some(q) = quantify
        && q.min.is_some()
        && q.max.is_some()
    {
        let value = sample_range(q.min, q.max, q.step, rng)
            .map_or_else(|| NOT_SPECIFIED.to_string(), |v| v.to_string());
        let unit = q.unit.as_deref().unwrap_or(DEFAULT_UNIT);
        return description
            .replacen(VALUE_TOKEN, &value, 1)
            .replacen(UNIT_TOKEN, unit, 1);
    }

    description.to_string()
}

/// Resolve an item into a free-text item whose description is final.
///
/// The quantification is dropped so a later restore renders the same text.
pub fn resolve_item<R: Rng + ?Sized>(item: &GoalItem, rng: &mut R) -> GoalItem {
    GoalItem {
        description: Some(resolve_description(
            item.description.as_deref(),
            item.quantify.as_ref(),
            rng,
        )),
        quantify: None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn quantify(min: i64, max: i64, step: i64, unit: Option<&str>) -> Quantify {
        Quantify {
            min: Some(min),
            max: Some(max),
            step: Some(step),
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn missing_description_is_not_specified() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = quantify(1, 5, 1, None);
        assert_eq!(resolve_description(None, Some(&q), &mut rng), NOT_SPECIFIED);
        assert_eq!(resolve_description(None, None, &mut rng), NOT_SPECIFIED);
    }

    #[test]
    fn empty_description_is_not_specified_with_or_without_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = quantify(1, 2, 1, None);
        assert_eq!(resolve_description(Some(""), Some(&q), &mut rng), NOT_SPECIFIED);
        assert_eq!(resolve_description(Some(""), None, &mut rng), NOT_SPECIFIED);
    }

    #[test]
    fn plain_description_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            resolve_description(Some("Take a walk"), None, &mut rng),
            "Take a walk"
        );
    }

    #[test]
    fn substitutes_value_and_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = quantify(4, 8, 1, Some("glasses"));
        for _ in 0..50 {
            let text = resolve_description(Some("Drink {value} {unit} of water"), Some(&q), &mut rng);
            let n: i64 = text
                .strip_prefix("Drink ")
                .and_then(|rest| rest.strip_suffix(" glasses of water"))
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("unexpected text: {text}"));
            assert!((4..=8).contains(&n));
        }
    }

    #[test]
    fn unit_defaults_and_failed_sample_reads_not_specified() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = Quantify {
            min: Some(1),
            max: Some(3),
            step: None,
            unit: None,
        };
        assert_eq!(
            resolve_description(Some("Do {value} {unit}"), Some(&q), &mut rng),
            "Do Not specified units"
        );
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = quantify(2, 2, 1, Some("km"));
        assert_eq!(
            resolve_description(Some("{value} {unit} then {value} {unit}"), Some(&q), &mut rng),
            "2 km then {value} {unit}"
        );
    }

    #[test]
    fn half_open_range_leaves_description_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = Quantify {
            min: Some(1),
            max: None,
            step: Some(1),
            unit: Some("km".to_string()),
        };
        assert_eq!(
            resolve_description(Some("Run {value} {unit}"), Some(&q), &mut rng),
            "Run {value} {unit}"
        );
    }

    #[test]
    fn invalid_ranges_fail() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_range(None, Some(5), Some(1), &mut rng), None);
        assert_eq!(sample_range(Some(1), None, Some(1), &mut rng), None);
        assert_eq!(sample_range(Some(1), Some(5), None, &mut rng), None);
        assert_eq!(sample_range(Some(1), Some(5), Some(0), &mut rng), None);
        assert_eq!(sample_range(Some(1), Some(5), Some(-2), &mut rng), None);
        assert_eq!(sample_range(Some(6), Some(5), Some(1), &mut rng), None);
    }

    #[test]
    fn endpoints_are_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: std::collections::BTreeSet<i64> = (0..200)
            .filter_map(|_| sample_range(Some(10), Some(20), Some(5), &mut rng))
            .collect();
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![10, 15, 20]);
    }

    #[test]
    fn resolved_item_is_stable() {
        let mut rng = StdRng::seed_from_u64(5);
        let item = GoalItem {
            description: Some("Read {value} {unit}".to_string()),
            quantify: Some(quantify(10, 30, 10, Some("pages"))),
        };
        let resolved = resolve_item(&item, &mut rng);
        assert!(resolved.quantify.is_none());
        assert_eq!(resolve_item(&resolved, &mut rng), resolved);
    }
}
