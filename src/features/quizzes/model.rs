use crate::features::questions::model::JsonQuestion;
use crate::services::quiz::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};

// clients send the category id either as a number or as the string key of the category map
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl CategoryId {
    pub fn resolve(&self) -> Result<i64, String> {
        let id = match self {
            CategoryId::Number(id) => *id,
            CategoryId::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("quiz_category.id '{}' is not a number", raw))?,
        };

        if id < ALL_CATEGORIES {
            return Err(format!("quiz_category.id must not be negative, got {}", id));
        }

        Ok(id)
    }
}

#[derive(Deserialize, Debug)]
pub struct QuizCategory {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(alias = "previous_questions")]
    pub previous_question: Vec<i64>,
}

#[derive(Serialize, Debug)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<JsonQuestion>,
}
