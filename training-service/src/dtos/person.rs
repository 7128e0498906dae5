use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CreatePerson;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    /// The person's name.
    #[schema(example = "Maria Silva", max_length = 50)]
    pub name: String,
}

impl From<CreatePersonRequest> for CreatePerson {
    fn from(req: CreatePersonRequest) -> Self {
        CreatePerson { name: req.name }
    }
}
