use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use emaily_core::models::template::{CreateTemplate, Template, UpdateTemplate};

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Durable storage of email templates.
///
/// Every operation touches a single record. There is no optimistic
/// concurrency: two concurrent updates to one template race and the later
/// write wins.
///
/// Methods return boxed futures for dyn compatibility.
pub trait TemplateStore: Send + Sync {
    /// All templates, newest first.
    fn list(&self) -> BoxFuture<'_, Result<Vec<Template>, StorageError>>;

    /// Validate and persist a new template. Nothing is stored on error.
    fn create(&self, input: CreateTemplate) -> BoxFuture<'_, Result<Template, StorageError>>;

    fn get_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Template, StorageError>>;

    /// Apply `update` onto the stored record and re-validate it.
    fn update_by_id(
        &self,
        id: Uuid,
        update: UpdateTemplate,
    ) -> BoxFuture<'_, Result<Template, StorageError>>;

    fn delete_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>>;
}

/// Order templates by creation time, newest first. The sort is stable, so
/// callers that know insertion order should pass records newest-inserted
/// first to break ties.
pub fn sort_newest_first(templates: &mut [Template]) {
    templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
