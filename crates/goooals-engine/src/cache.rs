//! Ephemeral per-tab session storage for the currently displayed goal.
//!
//! Reads and writes are synchronous and last-writer-wins. Nothing here
//! outlives the session.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::EngineError;

/// Keys under which the UI persists its state.
pub mod keys {
    pub const EXTERNAL_GOAL: &str = "externalGoal";
    pub const STANDARD_GOAL: &str = "standardGoal";
    pub const SELECTED_TAB: &str = "selectedTab";
}

/// String key-value storage scoped to one browser tab.
pub trait SessionCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionCache {
    entries: HashMap<String, String>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionCache for MemorySessionCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read a JSON snapshot. A missing key is `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(
    cache: &impl SessionCache,
    key: &str,
) -> Result<Option<T>, EngineError> {
    cache
        .get(key)
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(EngineError::from)
}

pub fn store_json<T: Serialize>(
    cache: &mut impl SessionCache,
    key: &str,
    value: &T,
) -> Result<(), EngineError> {
    let json = serde_json::to_string(value)?;
    cache.set(key, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_snapshots_round_trip_through_the_cache() {
        let mut cache = MemorySessionCache::new();
        assert_eq!(load_json::<Vec<u32>>(&cache, "k").unwrap(), None);

        store_json(&mut cache, "k", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(cache.get("k").as_deref(), Some("[1,2,3]"));

        cache.remove("k");
        assert!(cache.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let mut cache = MemorySessionCache::new();
        cache.set(keys::STANDARD_GOAL, "{not json".to_string());
        assert!(matches!(
            load_json::<serde_json::Value>(&cache, keys::STANDARD_GOAL),
            Err(EngineError::Serialization(_))
        ));
    }
}
