use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{
        training::{CreateTrainingRequest, TrainingListResponse, TrainingResponse},
        CreatedResponse, DeletedResponse,
    },
    models::CreateTraining,
    AppState,
};

/// Create a new training
///
/// Adds a training to the database and returns the assigned id. The
/// referenced person is not required to exist.
#[utoipa::path(
    post,
    path = "/training",
    request_body = CreateTrainingRequest,
    responses(
        (status = 200, description = "Id of the new training", body = CreatedResponse),
        (status = 422, description = "Missing or mistyped field")
    ),
    tag = "Training"
)]
pub async fn create_training(
    State(state): State<AppState>,
    Json(req): Json<CreateTrainingRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let training = state.db.create_training(&CreateTraining::from(req)).await?;
    Ok(Json(CreatedResponse { id: training.id }))
}

/// Delete a training
///
/// Removes the training with the given id. Succeeds even when no such
/// training exists.
#[utoipa::path(
    delete,
    path = "/training/{id}",
    params(
        ("id" = i64, Path, description = "Id of the training")
    ),
    responses(
        (status = 200, description = "Training deleted", body = DeletedResponse)
    ),
    tag = "Training"
)]
pub async fn delete_training(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state.db.delete_training(id).await?;
    if deleted == 0 {
        tracing::debug!(training_id = id, "Delete matched no training");
    }
    Ok(Json(DeletedResponse::deleted()))
}

/// Fetch a training
///
/// Looks up a training by id.
#[utoipa::path(
    get,
    path = "/training/{id}",
    params(
        ("id" = i64, Path, description = "Id of the training")
    ),
    responses(
        (status = 200, description = "The training", body = TrainingResponse),
        (status = 404, description = "No training with this id", body = crate::dtos::ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn get_training(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TrainingResponse>, AppError> {
    let training = state
        .db
        .get_training(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("not found")))?;

    Ok(Json(training.into()))
}

/// List a person's trainings
///
/// Returns every training that references the given person id. A person
/// with no trainings and an unknown person both yield 404.
#[utoipa::path(
    get,
    path = "/person/{id}/trainings",
    params(
        ("id" = i64, Path, description = "Id of the person")
    ),
    responses(
        (status = 200, description = "The person's trainings", body = TrainingListResponse),
        (status = 404, description = "No trainings reference this person", body = crate::dtos::ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn list_trainings_for_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TrainingListResponse>, AppError> {
    let trainings = state.db.list_trainings_for_person(id).await?;
    if trainings.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!("none found")));
    }

    Ok(Json(TrainingListResponse {
        trainings: trainings.into_iter().map(Into::into).collect(),
    }))
}
