use std::io::Write;

use goooals_core::models::goal_item::GoalItem;
use goooals_sources::catalog::Catalog;
use goooals_sources::error::SourceError;

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn single_entry_catalog_returns_that_entry() {
    let file = catalog_file(
        r#"[{"goal":"Walk 5000 steps","subgoals":[{"description":"Walk 5000 steps","quantify":null}],"criteria":[]}]"#,
    );
    let goal = Catalog::new(file.path()).random_goal().await.unwrap();

    assert_eq!(goal.goal.as_deref(), Some("Walk 5000 steps"));
    assert_eq!(goal.subgoals, Some(vec![GoalItem::from_text("Walk 5000 steps")]));
    assert_eq!(goal.criteria, Some(vec![]));
    assert_eq!(goal.id, None);
}

#[tokio::test]
async fn empty_catalog_is_reported() {
    let file = catalog_file("[]");
    let err = Catalog::new(file.path()).random_goal().await.unwrap_err();
    assert!(matches!(err, SourceError::EmptyCatalog));
    assert_eq!(err.to_string(), "No goals available");
}

#[tokio::test]
async fn unreadable_and_malformed_catalogs_fail() {
    let missing = Catalog::new("/definitely/not/here/goals.json");
    assert!(matches!(
        missing.load().await,
        Err(SourceError::CatalogRead { .. })
    ));

    let file = catalog_file("{ not a list");
    assert!(matches!(
        Catalog::new(file.path()).load().await,
        Err(SourceError::CatalogParse(_))
    ));
}
