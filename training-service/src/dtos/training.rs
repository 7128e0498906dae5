use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CreateTraining, Training};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTrainingRequest {
    /// The training's title.
    #[schema(example = "Workplace Safety", max_length = 120)]
    pub title: String,
    /// Id of the person who attended. Not checked for existence.
    #[schema(example = 1)]
    pub person_id: i64,
}

impl From<CreateTrainingRequest> for CreateTraining {
    fn from(req: CreateTrainingRequest) -> Self {
        CreateTraining {
            title: req.title,
            person_id: req.person_id,
        }
    }
}

/// Full training record, as returned by `GET /training/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Workplace Safety")]
    pub title: String,
    #[schema(example = 1)]
    pub person_id: i64,
}

impl From<Training> for TrainingResponse {
    fn from(training: Training) -> Self {
        TrainingResponse {
            id: training.id,
            title: training.title,
            person_id: training.person_id,
        }
    }
}

/// A training as listed under its person; the owner id is implied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainingSummary {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Workplace Safety")]
    pub title: String,
}

impl From<Training> for TrainingSummary {
    fn from(training: Training) -> Self {
        TrainingSummary {
            id: training.id,
            title: training.title,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainingListResponse {
    pub trainings: Vec<TrainingSummary>,
}
