//! Person model.

use sqlx::FromRow;

/// A row of the `person` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// Input for inserting a person. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct CreatePerson {
    pub name: String,
}
