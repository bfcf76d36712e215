use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use emaily_core::models::template::{parse_template_id, CreateTemplate, Template, UpdateTemplate};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A path id that cannot name a template is reported the same as a missing one.
fn template_id(raw: &str) -> Result<Uuid, ApiError> {
    parse_template_id(raw).map_err(|e| {
        tracing::debug!(id = raw, error = %e, "rejecting malformed template id");
        ApiError::template_not_found()
    })
}

pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Template>>, ApiError> {
    let templates = state
        .store
        .list()
        .await
        .map_err(ApiError::store("Error fetching templates"))?;
    Ok(Json(templates))
}

pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<CreateTemplate>, JsonRejection>,
) -> Result<(StatusCode, Json<Template>), ApiError> {
    let Json(input) = payload?;
    let template = state
        .store
        .create(input)
        .await
        .map_err(ApiError::store("Error creating template"))?;
    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, ApiError> {
    let id = template_id(&id)?;
    let template = state
        .store
        .get_by_id(id)
        .await
        .map_err(ApiError::store("Error fetching template"))?;
    Ok(Json(template))
}

pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTemplate>, JsonRejection>,
) -> Result<Json<Template>, ApiError> {
    let id = template_id(&id)?;
    // A body without a JSON content type carries no fields.
    let update = match payload {
        Ok(Json(update)) => update,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateTemplate::default(),
        Err(e) => return Err(e.into()),
    };
    let template = state
        .store
        .update_by_id(id, update)
        .await
        .map_err(ApiError::store("Error updating template"))?;
    Ok(Json(template))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = template_id(&id)?;
    state
        .store
        .delete_by_id(id)
        .await
        .map_err(ApiError::store("Error deleting template"))?;
    Ok(Json(MessageResponse {
        message: "Template deleted successfully".to_string(),
    }))
}
