use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::{get_all_categories, get_category},
        queries::questions::get_questions_for_category,
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiResult},
    },
};

#[derive(Serialize)]
struct CategoriesPayload {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsPayload {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResult<CategoriesPayload> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesPayload {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
) -> ApiResult<CategoryQuestionsPayload> {
    let category = get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, category_id).await?;
    Ok(Json(CategoryQuestionsPayload {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
