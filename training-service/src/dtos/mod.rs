pub mod person;
pub mod training;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every 404 returned by the read endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "not found")]
    pub error: String,
}

/// Returned by both create endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: i64,
}

/// Returned by both delete endpoints, whether or not a row matched.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "deleted")]
    pub result: String,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self {
            result: "deleted".to_string(),
        }
    }
}
