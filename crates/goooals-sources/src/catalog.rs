use std::path::PathBuf;

use rand::Rng;

use goooals_core::models::standard::StandardGoal;

use crate::error::SourceError;

/// Read-only catalog of standard goals stored as a JSON array.
///
/// The file is re-read on every pick so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<StandardGoal>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::CatalogRead {
                path: self.path.clone(),
                source,
            })?;
        let goals: Vec<StandardGoal> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = goals.len(), "catalog loaded");
        Ok(goals)
    }

    /// Load the catalog and pick one entry uniformly at random.
    pub async fn random_goal(&self) -> Result<StandardGoal, SourceError> {
        let goals = self.load().await?;
        pick_random(goals, &mut rand::thread_rng())
    }
}

/// Take one goal uniformly at random out of `goals`.
pub fn pick_random<R: Rng + ?Sized>(
    mut goals: Vec<StandardGoal>,
    rng: &mut R,
) -> Result<StandardGoal, SourceError> {
    if goals.is_empty() {
        return Err(SourceError::EmptyCatalog);
    }
    let index = rng.gen_range(0..goals.len());
    Ok(goals.swap_remove(index))
}
