//! Database service for training-service.

use crate::models::{CreatePerson, CreateTraining, Person, Training};
use crate::services::metrics::{DB_QUERY_DURATION, ENTITIES_CREATED, ENTITIES_DELETED};
use service_core::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

const CREATE_PERSON_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS person (
        id INTEGER PRIMARY KEY,
        name VARCHAR(50) NOT NULL
    )
"#;

const CREATE_TRAINING_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS training (
        id INTEGER PRIMARY KEY,
        title VARCHAR(120) NOT NULL,
        person_id INTEGER NOT NULL REFERENCES person (id)
    )
"#;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool, creating the database file if needed.
    ///
    /// Foreign keys are declared in the schema but not enforced: trainings may
    /// reference people that never existed or have since been deleted.
    #[instrument(skip(database_url), fields(service = "training-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to SQLite"
        );

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("SQLite connection pool established");

        Ok(Self { pool })
    }

    /// Create both tables if they do not exist yet. No versioning.
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), AppError> {
        info!("Initializing database schema");
        for ddl in [CREATE_PERSON_TABLE, CREATE_TRAINING_TABLE] {
            sqlx::query(ddl).execute(&self.pool).await.map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Schema creation failed: {}", e))
            })?;
        }
        info!("Database schema ready");
        Ok(())
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["health_check"])
            .start_timer();

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;

        timer.observe_duration();
        Ok(())
    }

    /// Close every pooled connection. Subsequent queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite connection pool closed");
    }

    // =========================================================================
    // Person Operations
    // =========================================================================

    /// Insert a person and return the stored row.
    #[instrument(skip(self, input))]
    pub async fn create_person(&self, input: &CreatePerson) -> Result<Person, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_person"])
            .start_timer();

        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO person (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(&input.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to create person: {}", e)))?;

        timer.observe_duration();
        ENTITIES_CREATED.with_label_values(&["person"]).inc();
        info!(person_id = person.id, "Person created");

        Ok(person)
    }

    /// Delete the person with `id`. Returns the number of rows removed (0 or 1).
    ///
    /// The person's trainings are left in place.
    #[instrument(skip(self))]
    pub async fn delete_person(&self, id: i64) -> Result<u64, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_person"])
            .start_timer();

        let result = sqlx::query("DELETE FROM person WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete person: {}", e))
            })?;

        timer.observe_duration();
        let deleted = result.rows_affected();
        ENTITIES_DELETED
            .with_label_values(&["person"])
            .inc_by(deleted as f64);

        Ok(deleted)
    }

    // =========================================================================
    // Training Operations
    // =========================================================================

    /// Insert a training and return the stored row.
    #[instrument(skip(self, input), fields(person_id = input.person_id))]
    pub async fn create_training(&self, input: &CreateTraining) -> Result<Training, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_training"])
            .start_timer();

        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO training (title, person_id)
            VALUES (?1, ?2)
            RETURNING id, title, person_id
            "#,
        )
        .bind(&input.title)
        .bind(input.person_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to create training: {}", e))
        })?;

        timer.observe_duration();
        ENTITIES_CREATED.with_label_values(&["training"]).inc();
        info!(training_id = training.id, "Training created");

        Ok(training)
    }

    /// Delete the training with `id`. Returns the number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete_training(&self, id: i64) -> Result<u64, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_training"])
            .start_timer();

        let result = sqlx::query("DELETE FROM training WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete training: {}", e))
            })?;

        timer.observe_duration();
        let deleted = result.rows_affected();
        ENTITIES_DELETED
            .with_label_values(&["training"])
            .inc_by(deleted as f64);

        Ok(deleted)
    }

    /// Get a training by ID.
    #[instrument(skip(self))]
    pub async fn get_training(&self, id: i64) -> Result<Option<Training>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_training"])
            .start_timer();

        let training = sqlx::query_as::<_, Training>(
            r#"
            SELECT id, title, person_id
            FROM training
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get training: {}", e)))?;

        timer.observe_duration();

        Ok(training)
    }

    /// All trainings referencing `person_id`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_trainings_for_person(
        &self,
        person_id: i64,
    ) -> Result<Vec<Training>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_trainings_for_person"])
            .start_timer();

        let trainings = sqlx::query_as::<_, Training>(
            r#"
            SELECT id, title, person_id
            FROM training
            WHERE person_id = ?1
            ORDER BY id
            "#,
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to list trainings: {}", e))
        })?;

        timer.observe_duration();

        Ok(trainings)
    }
}
