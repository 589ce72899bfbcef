//! Explicit state container for the goal UI.
//!
//! [`GoalSession`] owns the displayed goals, the selected generator tab and
//! the item editor, and mirrors every mutation into a [`SessionCache`]. It
//! holds no rendering state; each operation returns a [`Notice`] carrying
//! the message the UI shows, or an [`EngineError`] for validation failures.

use rand::Rng;

use goooals_core::models::email::SendEmailRequest;
use goooals_core::models::external::ExternalGoal;
use goooals_core::models::goal_item::GoalItem;
use goooals_core::models::standard::StandardGoal;

use crate::cache::{SessionCache, keys, load_json, store_json};
use crate::collection::{self, ItemKind, ItemRandomization};
use crate::email::validate_email_address;
use crate::error::EngineError;
use crate::mode::GeneratorMode;
use crate::randomize::SINGLE_ITEM_JITTER;
use crate::template::resolve_item;

/// Outcome of a successful operation, worded for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ItemAdded(ItemKind),
    ItemDeleted(ItemKind),
    ItemRandomized(ItemKind),
    NoNumberFound(ItemKind),
    DescriptionUnavailable(ItemKind),
    AllRandomized,
    NothingToRandomize,
    GoalCleared,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::ItemAdded(kind) => format!("{} added successfully", kind.label()),
            Notice::ItemDeleted(kind) => format!("{} deleted successfully", kind.label()),
            Notice::ItemRandomized(kind) => format!("{} randomized successfully", kind.label()),
            Notice::NoNumberFound(ItemKind::Subgoal) => {
                "No number found to randomize in subgoal".to_string()
            }
            Notice::NoNumberFound(ItemKind::Criterion) => {
                "No number found to randomize".to_string()
            }
            Notice::DescriptionUnavailable(ItemKind::Subgoal) => {
                "Subgoal description is not available".to_string()
            }
            Notice::DescriptionUnavailable(ItemKind::Criterion) => {
                "Criterion description is not available".to_string()
            }
            Notice::AllRandomized => {
                "All applicable subgoals and criteria randomized successfully".to_string()
            }
            Notice::NothingToRandomize => {
                "No numbers found to randomize in subgoals or criteria.".to_string()
            }
            Notice::GoalCleared => "Goal cleared successfully".to_string(),
        }
    }

    /// "Nothing to do" outcomes: shown to the user, but not failures.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Notice::NoNumberFound(_) | Notice::DescriptionUnavailable(_) | Notice::NothingToRandomize
        )
    }
}

pub struct GoalSession<C: SessionCache> {
    cache: C,
    mode: GeneratorMode,
    standard: Option<StandardGoal>,
    external: Option<ExternalGoal>,
    editing: Option<ItemKind>,
}

impl<C: SessionCache> GoalSession<C> {
    /// Rebuild the session from whatever the cache holds. Snapshots that
    /// fail to parse are logged and ignored.
    pub fn restore<R: Rng + ?Sized>(cache: C, rng: &mut R) -> Self {
        let mode = cache
            .get(keys::SELECTED_TAB)
            .and_then(|id| id.parse().ok())
            .unwrap_or_default();

        let standard = load_json::<StandardGoal>(&cache, keys::STANDARD_GOAL)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unreadable standard goal snapshot");
                None
            })
            .map(|goal| resolve_goal(goal, rng));

        let external = load_json::<ExternalGoal>(&cache, keys::EXTERNAL_GOAL).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable external goal snapshot");
            None
        });

        Self {
            cache,
            mode,
            standard,
            external,
            editing: None,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn select_mode(&mut self, mode: GeneratorMode) {
        self.mode = mode;
        self.cache.set(keys::SELECTED_TAB, mode.id().to_string());
    }

    // --- standard goal -------------------------------------------------

    /// Display a freshly picked standard goal. Placeholders are resolved
    /// once here; the resolved text is what gets cached.
    pub fn load_standard_goal<R: Rng + ?Sized>(
        &mut self,
        goal: StandardGoal,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.standard = Some(resolve_goal(goal, rng));
        self.editing = None;
        self.persist_standard()
    }

    pub fn standard_goal(&self) -> Option<&StandardGoal> {
        self.standard.as_ref()
    }

    pub fn items(&self, kind: ItemKind) -> &[GoalItem] {
        match (&self.standard, kind) {
            (Some(goal), ItemKind::Subgoal) => goal.subgoals(),
            (Some(goal), ItemKind::Criterion) => goal.criteria(),
            (None, _) => &[],
        }
    }

    /// Which collection, if any, is in free-text input mode.
    pub fn editing(&self) -> Option<ItemKind> {
        self.editing
    }

    /// Open the editor for `kind`; any other open editor closes.
    pub fn open_editor(&mut self, kind: ItemKind) {
        self.editing = Some(kind);
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn add_item(&mut self, kind: ItemKind, text: &str) -> Result<Notice, EngineError> {
        let goal = self
            .standard
            .as_mut()
            .ok_or(EngineError::NoGoal { action: "edit" })?;
        collection::add_item(items_mut(goal, kind), kind, text)?;
        self.editing = None;
        self.persist_standard()?;
        Ok(Notice::ItemAdded(kind))
    }

    pub fn delete_item(&mut self, kind: ItemKind, index: usize) -> Result<Notice, EngineError> {
        let goal = self
            .standard
            .as_mut()
            .ok_or(EngineError::NoGoal { action: "edit" })?;
        collection::delete_item(items_mut(goal, kind), kind, index)?;
        self.persist_standard()?;
        Ok(Notice::ItemDeleted(kind))
    }

    pub fn randomize_item<R: Rng + ?Sized>(
        &mut self,
        kind: ItemKind,
        index: usize,
        rng: &mut R,
    ) -> Result<Notice, EngineError> {
        let goal = self
            .standard
            .as_mut()
            .ok_or(EngineError::NoGoal { action: "randomize" })?;
        let outcome =
            collection::randomize_item(items_mut(goal, kind), kind, index, SINGLE_ITEM_JITTER, rng)?;

        Ok(match outcome {
            ItemRandomization::Changed => {
                self.persist_standard()?;
                Notice::ItemRandomized(kind)
            }
            ItemRandomization::NoNumberFound => Notice::NoNumberFound(kind),
            ItemRandomization::DescriptionUnavailable => Notice::DescriptionUnavailable(kind),
        })
    }

    /// Re-roll every number in both collections with the batch jitter.
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Notice, EngineError> {
        let goal = self
            .standard
            .as_mut()
            .ok_or(EngineError::NoGoal { action: "randomize" })?;
        self.editing = None;

        let subgoals = collection::randomize_collection(items_mut(goal, ItemKind::Subgoal), rng);
        let criteria = collection::randomize_collection(items_mut(goal, ItemKind::Criterion), rng);
        if !(subgoals || criteria) {
            return Ok(Notice::NothingToRandomize);
        }

        self.persist_standard()?;
        Ok(Notice::AllRandomized)
    }

    pub fn clear_standard_goal(&mut self) -> Notice {
        self.standard = None;
        self.editing = None;
        self.cache.remove(keys::STANDARD_GOAL);
        Notice::GoalCleared
    }

    // --- external goal -------------------------------------------------

    pub fn load_external_goal(&mut self, goal: ExternalGoal) -> Result<(), EngineError> {
        store_json(&mut self.cache, keys::EXTERNAL_GOAL, &goal)?;
        self.external = Some(goal);
        Ok(())
    }

    pub fn external_goal(&self) -> Option<&ExternalGoal> {
        self.external.as_ref()
    }

    pub fn clear_external_goal(&mut self) {
        self.external = None;
        self.cache.remove(keys::EXTERNAL_GOAL);
    }

    // --- email ---------------------------------------------------------

    /// Build the `POST /api/sendEmail` body for the goal shown in the
    /// current tab.
    pub fn email_request(&self, address: &str) -> Result<SendEmailRequest, EngineError> {
        validate_email_address(address)?;

        let goal_type = self.mode.goal_type()?;
        let goal = match self.mode {
            GeneratorMode::Standard => self.standard.as_ref().map(serde_json::to_value),
            GeneratorMode::External => self.external.as_ref().map(serde_json::to_value),
            GeneratorMode::Intelligent => None,
        }
        .transpose()?
        .ok_or(EngineError::NoGoal { action: "send" })?;

        Ok(SendEmailRequest {
            email: Some(address.to_string()),
            goal: Some(goal),
            goal_type: Some(goal_type.to_string()),
        })
    }

    fn persist_standard(&mut self) -> Result<(), EngineError> {
        match &self.standard {
            Some(goal) => store_json(&mut self.cache, keys::STANDARD_GOAL, goal),
            None => {
                self.cache.remove(keys::STANDARD_GOAL);
                Ok(())
            }
        }
    }
}

fn items_mut(goal: &mut StandardGoal, kind: ItemKind) -> &mut Vec<GoalItem> {
    match kind {
        ItemKind::Subgoal => goal.subgoals.get_or_insert_with(Vec::new),
        ItemKind::Criterion => goal.criteria.get_or_insert_with(Vec::new),
    }
}

fn resolve_goal<R: Rng + ?Sized>(mut goal: StandardGoal, rng: &mut R) -> StandardGoal {
    for items in [&mut goal.subgoals, &mut goal.criteria].into_iter().flatten() {
        for item in items.iter_mut() {
            *item = resolve_item(item, rng);
        }
    }
    goal
}
