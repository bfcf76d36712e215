use tokio::sync::RwLock;
use uuid::Uuid;

use emaily_core::models::template::{CreateTemplate, Template, UpdateTemplate};

use crate::error::StorageError;
use crate::store::{sort_newest_first, BoxFuture, TemplateStore};

/// Process-local template store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryTemplateStore {
    templates: RwLock<Vec<Template>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Template>, StorageError>> {
        Box::pin(async move {
            let templates = self.templates.read().await;
            let mut out: Vec<Template> = templates.iter().rev().cloned().collect();
            sort_newest_first(&mut out);
            Ok(out)
        })
    }

    fn create(&self, input: CreateTemplate) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(async move {
            let fields = input.validate()?;
            let template = Template::new(Uuid::new_v4(), fields, jiff::Timestamp::now());
            self.templates.write().await.push(template.clone());
            tracing::debug!(id = %template.id, "template created");
            Ok(template)
        })
    }

    fn get_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(async move {
            self.templates
                .read()
                .await
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(StorageError::NotFound { id })
        })
    }

    fn update_by_id(
        &self,
        id: Uuid,
        update: UpdateTemplate,
    ) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(async move {
            let mut templates = self.templates.write().await;
            let template = templates
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(StorageError::NotFound { id })?;
            template.apply(update, jiff::Timestamp::now())?;
            tracing::debug!(%id, "template updated");
            Ok(template.clone())
        })
    }

    fn delete_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let mut templates = self.templates.write().await;
            let pos = templates
                .iter()
                .position(|t| t.id == id)
                .ok_or(StorageError::NotFound { id })?;
            templates.remove(pos);
            tracing::debug!(%id, "template deleted");
            Ok(())
        })
    }
}
