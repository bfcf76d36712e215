use emaily_core::models::template::{CreateTemplate, UpdateTemplate};
use emaily_storage::error::StorageError;
use emaily_storage::{MemoryTemplateStore, TemplateStore};
use uuid::Uuid;

fn input(name: &str) -> CreateTemplate {
    CreateTemplate {
        name: Some(name.to_string()),
        subject: Some("Hi".to_string()),
        body: Some("Hello there".to_string()),
        folder: None,
    }
}

#[tokio::test]
async fn create_then_get() {
    let store = MemoryTemplateStore::new();
    let created = store.create(input("Welcome")).await.unwrap();

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn invalid_create_stores_nothing() {
    let store = MemoryTemplateStore::new();
    let mut bad = input("Welcome");
    bad.body = None;

    let err = store.create(bad).await.unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_newest_first() {
    let store = MemoryTemplateStore::new();
    let a = store.create(input("A")).await.unwrap();
    let b = store.create(input("B")).await.unwrap();
    let c = store.create(input("C")).await.unwrap();

    let ids: Vec<Uuid> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn update_keeps_identity() {
    let store = MemoryTemplateStore::new();
    let created = store.create(input("Welcome")).await.unwrap();

    let update = UpdateTemplate {
        subject: Some(Some("Hello again".to_string())),
        ..Default::default()
    };
    let updated = store.update_by_id(created.id, update).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Welcome");
    assert_eq!(updated.subject, "Hello again");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(store.get_by_id(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn invalid_update_leaves_record_unchanged() {
    let store = MemoryTemplateStore::new();
    let created = store.create(input("Welcome")).await.unwrap();

    let update = UpdateTemplate {
        subject: Some(Some("   ".to_string())),
        ..Default::default()
    };
    let err = store.update_by_id(created.id, update).await.unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
    assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let store = MemoryTemplateStore::new();
    let id = Uuid::new_v4();

    assert!(matches!(store.get_by_id(id).await, Err(StorageError::NotFound { .. })));
    assert!(matches!(
        store.update_by_id(id, UpdateTemplate::default()).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(store.delete_by_id(id).await, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn delete_removes_record() {
    let store = MemoryTemplateStore::new();
    let keep = store.create(input("Keep")).await.unwrap();
    let gone = store.create(input("Gone")).await.unwrap();

    store.delete_by_id(gone.id).await.unwrap();

    let remaining = store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(matches!(store.delete_by_id(gone.id).await, Err(StorageError::NotFound { .. })));
}
