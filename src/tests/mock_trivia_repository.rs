use crate::AppState;
use crate::database::TriviaRepository;
use crate::domain::{Category, NewQuestion, Question};
use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
};
use std::sync::{Arc, Mutex};

// --- Manual Mock: TriviaRepository ---
// this fakes the database so handler tests don't need a real SQLite file
// everything lives in memory behind a mutex; `failing` makes every call error out
#[derive(Clone, Default)]
pub struct MockRepository {
    pub categories: Arc<Mutex<Vec<Category>>>,
    pub questions: Arc<Mutex<Vec<Question>>>,
    pub failing: bool,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn add_category(&self, id: i64, category_type: &str) {
        self.categories.lock().unwrap().push(Category {
            id,
            category_type: category_type.to_string(),
        });
    }

    // helper to "store" a question with a fixed id
    pub fn add_question(&self, id: i64, text: &str, category: i64) {
        self.questions.lock().unwrap().push(Question {
            id,
            question: text.to_string(),
            answer: format!("answer to {}", text),
            category,
            difficulty: 1,
        });
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.questions.lock().unwrap().iter().map(|q| q.id).collect()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            bail!("mock store is down");
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaRepository for MockRepository {
    async fn get_all_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.check()?;
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn get_all_questions(&self) -> Result<Vec<Question>> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn get_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = self.get_all_questions().await?;
        Ok(questions
            .into_iter()
            .filter(|q| q.category == category_id)
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let questions = self.get_all_questions().await?;
        Ok(questions
            .into_iter()
            .filter(|q| q.text_contains(term))
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let stored = question.clone().with_id(id);
        questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }
}

pub fn state_with(repo: &MockRepository) -> AppState {
    AppState {
        store: Arc::new(repo.clone()),
    }
}

// categories {1: Science, 2: Art} and `count` questions, all in Science, ids 1..=count
pub fn seeded_repository(count: i64) -> MockRepository {
    let repo = MockRepository::new();
    repo.add_category(1, "Science");
    repo.add_category(2, "Art");
    for id in 1..=count {
        repo.add_question(id, &format!("Science question {}", id), 1);
    }
    repo
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
