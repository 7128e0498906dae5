//! Training model.

use sqlx::FromRow;

/// A row of the `training` table.
///
/// `person_id` is not checked against `person`; it may dangle once the
/// person is deleted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Training {
    pub id: i64,
    pub title: String,
    pub person_id: i64,
}

/// Input for inserting a training.
#[derive(Debug, Clone)]
pub struct CreateTraining {
    pub title: String,
    pub person_id: i64,
}
