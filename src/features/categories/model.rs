use crate::domain::Category;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub struct DbCategory {
    pub id: i64,
    pub category_type: String,
}

impl From<DbCategory> for Category {
    fn from(db_category: DbCategory) -> Self {
        Category {
            id: db_category.id,
            category_type: db_category.category_type,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

// id -> display label, the shape every endpoint reports categories in
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.category_type.to_owned()))
        .collect()
}
