//! Object key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of template documents in the store's bucket.

use uuid::Uuid;

pub const TEMPLATES_PREFIX: &str = "templates/";

pub fn template(id: Uuid) -> String {
    format!("{TEMPLATES_PREFIX}{id}.json")
}

/// Recover the template id from an object key produced by [`template`].
pub fn template_id(key: &str) -> Option<Uuid> {
    let file = key.rsplit('/').next()?;
    file.strip_suffix(".json")?.parse().ok()
}
