use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{person::CreatePersonRequest, CreatedResponse, DeletedResponse},
    models::CreatePerson,
    AppState,
};

/// Create a new person
///
/// Adds a person to the database and returns the assigned id.
#[utoipa::path(
    post,
    path = "/person",
    request_body = CreatePersonRequest,
    responses(
        (status = 200, description = "Id of the new person", body = CreatedResponse),
        (status = 422, description = "Missing or mistyped field")
    ),
    tag = "Person"
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let person = state.db.create_person(&CreatePerson::from(req)).await?;
    Ok(Json(CreatedResponse { id: person.id }))
}

/// Delete a person
///
/// Removes the person with the given id. Succeeds even when no such person
/// exists. The person's trainings are not removed.
#[utoipa::path(
    delete,
    path = "/person/{id}",
    params(
        ("id" = i64, Path, description = "Id of the person")
    ),
    responses(
        (status = 200, description = "Person deleted", body = DeletedResponse)
    ),
    tag = "Person"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.db.delete_person(id).await?;
    if deleted == 0 {
        tracing::debug!(person_id = id, "Delete matched no person");
    }
    Ok(Json(DeletedResponse::deleted()))
}
