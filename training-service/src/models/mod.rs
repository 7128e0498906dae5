//! Persisted entities and their insert payloads.

pub mod person;
pub mod training;

pub use person::{CreatePerson, Person};
pub use training::{CreateTraining, Training};
