//! HTTP handlers for training-service.

pub mod health;
pub mod person;
pub mod training;
