use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// An email template as persisted by the store.
///
/// `folder` holds the URL of an uploaded image, not a filesystem path. The
/// name predates the image upload feature and is kept for wire compatibility
/// with the form client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Template {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image_url: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Payload for creating a template.
///
/// Every field is optional on the wire so that a missing field surfaces as
/// [`CoreError::MissingField`] rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
pub struct CreateTemplate {
    #[serde(default)]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub subject: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub body: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub folder: Option<String>,
}

/// Validated fields of a template that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub folder: Option<String>,
}

/// Partial update of a template.
///
/// Each field is `None` when absent from the payload, `Some(None)` when sent
/// as `null`, and `Some(Some(v))` when sent with a value.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateTemplate {
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub subject: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub body: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub folder: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub image_url: Option<Option<String>>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl CreateTemplate {
    /// Trim and check the required fields.
    pub fn validate(self) -> Result<NewTemplate, CoreError> {
        Ok(NewTemplate {
            name: required_trimmed("name", self.name)?,
            subject: required_trimmed("subject", self.subject)?,
            body: required("body", self.body)?,
            folder: optional_trimmed(self.folder),
        })
    }
}

impl Template {
    pub fn new(id: Uuid, fields: NewTemplate, now: jiff::Timestamp) -> Self {
        Self {
            id,
            name: fields.name,
            subject: fields.subject,
            body: fields.body,
            folder: fields.folder,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. On error the template is left untouched.
    pub fn apply(&mut self, update: UpdateTemplate, now: jiff::Timestamp) -> Result<(), CoreError> {
        let mut next = self.clone();

        if let Some(name) = update.name {
            next.name = required_trimmed("name", name)?;
        }
        if let Some(subject) = update.subject {
            next.subject = required_trimmed("subject", subject)?;
        }
        if let Some(body) = update.body {
            next.body = required("body", body)?;
        }
        if let Some(folder) = update.folder {
            next.folder = optional_trimmed(folder);
        }
        if let Some(image_url) = update.image_url {
            next.image_url = optional_trimmed(image_url);
        }

        next.updated_at = now;
        *self = next;
        Ok(())
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::MissingField(field)),
    }
}

fn required_trimmed(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    required(field, value.map(|v| v.trim().to_string()))
}

fn optional_trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a template id as it appears in a request path.
pub fn parse_template_id(raw: &str) -> Result<Uuid, CoreError> {
    Ok(Uuid::parse_str(raw.trim())?)
}
