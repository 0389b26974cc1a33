use crate::domain::{NewQuestion, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub struct DbQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<DbQuestion> for Question {
    fn from(db_question: DbQuestion) -> Self {
        Question {
            id: db_question.id,
            question: db_question.question,
            answer: db_question.answer,
            category: db_question.category,
            difficulty: db_question.difficulty,
        }
    }
}

/// The formatted form of a question as it goes over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&Question> for JsonQuestion {
    fn from(question: &Question) -> Self {
        JsonQuestion {
            id: question.id,
            question: question.question.to_owned(),
            answer: question.answer.to_owned(),
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct NewQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestionRequest {
    // field types are checked by serde; beyond that only blank text is refused.
    // text is stored exactly as received
    pub fn validate(self) -> Result<NewQuestion, String> {
        if self.question.trim().is_empty() {
            return Err("question must not be empty".to_string());
        }

        if self.answer.trim().is_empty() {
            return Err("answer must not be empty".to_string());
        }

        Ok(NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Serialize, Debug)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Serialize, Debug)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<JsonQuestion>,
    pub total_questions: usize,
    // only the plain listing carries the category map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i64, String>>,
    pub current_category: Option<String>,
}
