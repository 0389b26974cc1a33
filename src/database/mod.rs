use crate::config::TriviaConfig;
use crate::domain::{Category, NewQuestion, Question};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub mod sqlite;

// generic trivia store operations, handed to the handlers through AppState.
// db specific implementations live next to this file ("sqlite.rs")
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn get_all_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: i64) -> Result<Option<Category>>;

    /// All questions, ordered by id.
    async fn get_all_questions(&self) -> Result<Vec<Question>>;
    async fn get_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>>;
    /// Questions whose text contains `term`, ignoring case. Ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    // write operations
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question>;
    /// Returns `false` when no question with this id existed.
    async fn delete_question(&self, id: i64) -> Result<bool>;
}

/// Opens (and creates, if needed) the SQLite database and brings its schema up to date.
pub async fn connect(config: &TriviaConfig) -> Result<Pool<Sqlite>> {
    let exists = Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false);

    if !exists {
        tracing::warn!(url = %config.database_url, "database not found, creating");
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
        tracing::info!(url = %config.database_url, "database created");
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "database ready"
    );

    Ok(pool)
}
