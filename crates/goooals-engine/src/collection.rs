//! Ordered subgoal / criteria collections and their mutations.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use goooals_core::models::goal_item::GoalItem;
use goooals_core::text::contains_digit;

use crate::error::EngineError;
use crate::randomize::{BATCH_JITTER, Randomized, randomize_numbers};

/// Which of a goal's two item collections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Subgoal,
    Criterion,
}

impl ItemKind {
    /// Capitalised label used at the start of user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Subgoal => "Subgoal",
            ItemKind::Criterion => "Criteria",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of re-rolling the numbers of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRandomization {
    Changed,
    NoNumberFound,
    DescriptionUnavailable,
}

pub fn add_item(items: &mut Vec<GoalItem>, kind: ItemKind, text: &str) -> Result<(), EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyItem { kind });
    }
    items.push(GoalItem::from_text(text));
    Ok(())
}

pub fn delete_item(
    items: &mut Vec<GoalItem>,
    kind: ItemKind,
    index: usize,
) -> Result<GoalItem, EngineError> {
    if index >= items.len() {
        return Err(EngineError::IndexOutOfBounds {
            kind,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

/// Re-roll every number in one item's description.
pub fn randomize_item<R: Rng + ?Sized>(
    items: &mut [GoalItem],
    kind: ItemKind,
    index: usize,
    jitter: f64,
    rng: &mut R,
) -> Result<ItemRandomization, EngineError> {
    let len = items.len();
    let item = items
        .get_mut(index)
        .ok_or(EngineError::IndexOutOfBounds { kind, index, len })?;

    let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) else {
        return Ok(ItemRandomization::DescriptionUnavailable);
    };

    if !contains_digit(description) {
        return Ok(ItemRandomization::NoNumberFound);
    }
    let Randomized { text, .. } = randomize_numbers(description, jitter, rng);
    item.description = Some(text);
    Ok(ItemRandomization::Changed)
}

/// Re-roll every item that carries at least one number, using the batch
/// jitter. Returns whether anything changed.
pub fn randomize_collection<R: Rng + ?Sized>(items: &mut [GoalItem], rng: &mut R) -> bool {
    let mut any = false;
    for item in items.iter_mut() {
        let Some(description) = item.description.as_deref().filter(|d| contains_digit(d)) else {
            continue;
        };
        let Randomized { text, .. } = randomize_numbers(description, BATCH_JITTER, rng);
        item.description = Some(text);
        any = true;
    }
    any
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::randomize::SINGLE_ITEM_JITTER;

    fn items(texts: &[Option<&str>]) -> Vec<GoalItem> {
        texts
            .iter()
            .map(|t| GoalItem {
                description: t.map(str::to_string),
                quantify: None,
            })
            .collect()
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = Vec::new();
        let err = add_item(&mut list, ItemKind::Subgoal, "   \t").unwrap_err();
        assert!(matches!(err, EngineError::EmptyItem { kind: ItemKind::Subgoal }));
        assert!(list.is_empty());

        add_item(&mut list, ItemKind::Subgoal, "Stretch 10 minutes").unwrap();
        assert_eq!(list, vec![GoalItem::from_text("Stretch 10 minutes")]);
    }

    #[test]
    fn delete_checks_bounds() {
        let mut list = items(&[Some("a"), Some("b"), Some("c")]);
        let removed = delete_item(&mut list, ItemKind::Criterion, 1).unwrap();
        assert_eq!(removed.description.as_deref(), Some("b"));
        assert_eq!(list, items(&[Some("a"), Some("c")]));
        assert!(matches!(
            delete_item(&mut list, ItemKind::Criterion, 2),
            Err(EngineError::IndexOutOfBounds { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn randomize_item_reports_each_condition() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut list = items(&[Some("Walk 5000 steps"), Some("Take a walk"), None]);

        let kind = ItemKind::Subgoal;
        assert_eq!(
            randomize_item(&mut list, kind, 0, SINGLE_ITEM_JITTER, &mut rng).unwrap(),
            ItemRandomization::Changed
        );
        assert_ne!(list[0].description.as_deref(), Some("Walk 5000 steps"));
        assert_eq!(
            randomize_item(&mut list, kind, 1, SINGLE_ITEM_JITTER, &mut rng).unwrap(),
            ItemRandomization::NoNumberFound
        );
        assert_eq!(
            randomize_item(&mut list, kind, 2, SINGLE_ITEM_JITTER, &mut rng).unwrap(),
            ItemRandomization::DescriptionUnavailable
        );
        assert!(randomize_item(&mut list, kind, 3, SINGLE_ITEM_JITTER, &mut rng).is_err());
    }

    #[test]
    fn randomize_collection_skips_items_without_numbers() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut list = items(&[Some("Take a walk"), None]);
        assert!(!randomize_collection(&mut list, &mut rng));
        assert_eq!(list, items(&[Some("Take a walk"), None]));

        let mut list = items(&[Some("Take a walk"), Some("Swim 20 laps")]);
        assert!(randomize_collection(&mut list, &mut rng));
        assert_eq!(list[0].description.as_deref(), Some("Take a walk"));
        assert_ne!(list[1].description.as_deref(), Some("Swim 20 laps"));
    }
}
