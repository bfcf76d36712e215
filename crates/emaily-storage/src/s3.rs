use aws_sdk_s3::Client;
use uuid::Uuid;

use emaily_core::keys;
use emaily_core::models::template::{CreateTemplate, Template, UpdateTemplate};

use crate::documents::{load_document, save_document};
use crate::error::StorageError;
use crate::objects;
use crate::store::{sort_newest_first, BoxFuture, TemplateStore};

/// Template store backed by JSON documents in an S3 bucket.
///
/// Each template lives at `{prefix}templates/{id}.json`.
#[derive(Clone)]
pub struct S3TemplateStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3TemplateStore {
    /// `prefix` is prepended to every key; pass `""` to use the bucket root.
    /// A non-empty prefix is normalized to end with `/`.
    pub fn new(client: Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self {
            client,
            bucket: bucket.into(),
            prefix,
        }
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}{}", self.prefix, keys::template(id))
    }

    /// Load a template, mapping a missing object to `NotFound`.
    async fn load(&self, id: Uuid) -> Result<Template, StorageError> {
        match load_document(&self.client, &self.bucket, &self.key(id)).await {
            Err(StorageError::ObjectNotFound { .. }) => Err(StorageError::NotFound { id }),
            other => other,
        }
    }
}

impl TemplateStore for S3TemplateStore {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Template>, StorageError>> {
        Box::pin(async move {
            let prefix = format!("{}{}", self.prefix, keys::TEMPLATES_PREFIX);
            let object_keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

            let mut templates = Vec::with_capacity(object_keys.len());
            for key in object_keys.iter().filter(|k| keys::template_id(k).is_some()) {
                match load_document::<Template>(&self.client, &self.bucket, key).await {
                    Ok(template) => templates.push(template),
                    // Deleted between list and get.
                    Err(StorageError::ObjectNotFound { .. }) => continue,
                    Err(e) => return Err(e),
                }
            }

            sort_newest_first(&mut templates);
            Ok(templates)
        })
    }

    fn create(&self, input: CreateTemplate) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(async move {
            let fields = input.validate()?;
            let template = Template::new(Uuid::new_v4(), fields, jiff::Timestamp::now());
            save_document(&self.client, &self.bucket, &self.key(template.id), &template).await?;
            tracing::debug!(id = %template.id, bucket = %self.bucket, "template created");
            Ok(template)
        })
    }

    fn get_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(self.load(id))
    }

    fn update_by_id(
        &self,
        id: Uuid,
        update: UpdateTemplate,
    ) -> BoxFuture<'_, Result<Template, StorageError>> {
        Box::pin(async move {
            let mut template = self.load(id).await?;
            template.apply(update, jiff::Timestamp::now())?;
            save_document(&self.client, &self.bucket, &self.key(id), &template).await?;
            tracing::debug!(%id, bucket = %self.bucket, "template updated");
            Ok(template)
        })
    }

    fn delete_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let key = self.key(id);
            if !objects::object_exists(&self.client, &self.bucket, &key).await? {
                return Err(StorageError::NotFound { id });
            }
            objects::delete_object(&self.client, &self.bucket, &key).await?;
            tracing::debug!(%id, bucket = %self.bucket, "template deleted");
            Ok(())
        })
    }
}
