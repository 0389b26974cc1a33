use crate::database::TriviaRepository;
use crate::domain::{Category, NewQuestion, Question};
use crate::features::categories::model::DbCategory;
use crate::features::questions::model::DbQuestion;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

fn into_questions(db_questions: Vec<DbQuestion>) -> Vec<Question> {
    db_questions.into_iter().map(Question::from).collect()
}

#[async_trait]
impl TriviaRepository for SqliteRepository {
    async fn get_all_categories(&self) -> Result<Vec<Category>> {
        let db_categories = sqlx::query_as::<_, DbCategory>(
            "SELECT id, type AS category_type FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load categories")?;

        Ok(db_categories.into_iter().map(Category::from).collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        let db_category = sqlx::query_as::<_, DbCategory>(
            "SELECT id, type AS category_type FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load category {}", id))?;

        Ok(db_category.map(Category::from))
    }

    async fn get_all_questions(&self) -> Result<Vec<Question>> {
        let db_questions = sqlx::query_as::<_, DbQuestion>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load questions")?;

        Ok(into_questions(db_questions))
    }

    async fn get_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let db_questions = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to load questions for category {}", category_id))?;

        Ok(into_questions(db_questions))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        // SQLite's lower() only folds ASCII, so the match happens here instead
        let questions = self
            .get_all_questions()
            .await
            .with_context(|| format!("Failed to search questions for '{}'", term))?;

        Ok(questions
            .into_iter()
            .filter(|question| question.text_contains(term))
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .context("Failed to insert question")?;

        Ok(question.clone().with_id(result.last_insert_rowid()))
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete question {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}
