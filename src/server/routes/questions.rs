use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::get_all_categories,
        queries::questions::{
            create_question, delete_question, get_all_questions, get_question_by_id,
            search_questions,
        },
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiResult},
        pagination::{paginate, PageQuery},
    },
};

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPayload {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    // each category maps to a single-element list, the frontend expects
    // this shape
    categories: BTreeMap<i64, Vec<String>>,
}

#[derive(Serialize)]
struct DeletedPayload {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedPayload {
    success: bool,
    created: i64,
    question: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct SearchPayload {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<QuestionsPayload> {
    let questions = get_all_questions(&pool).await?;
    let current = paginate(&questions, page.unwrap_or(1));
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool)
        .await?
        .into_iter()
        .map(|c| (c.id, vec![c.kind]))
        .collect();
    Ok(Json(QuestionsPayload {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories,
    }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<DeletedPayload> {
    get_question_by_id(&pool, question_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    delete_question(&pool, question_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    let questions = get_all_questions(&pool).await?;
    let current = paginate(&questions, page.unwrap_or(1)).to_vec();
    Ok(Json(DeletedPayload {
        success: true,
        deleted: question_id,
        questions: current,
        total_questions: questions.len(),
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    Json(body): Json<NewQuestion>,
) -> ApiResult<CreatedPayload> {
    let (question, answer, category, difficulty) = match body {
        NewQuestion {
            question: Some(question),
            answer: Some(answer),
            category: Some(category),
            difficulty: Some(difficulty),
        } => (question, answer, category, difficulty),
        _ => return Err(ApiError::Unprocessable),
    };

    let id = create_question(&pool, &question, &answer, category, difficulty)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    let questions = get_all_questions(&pool).await?;
    let current = paginate(&questions, page.unwrap_or(1)).to_vec();
    Ok(Json(CreatedPayload {
        success: true,
        created: id,
        question: current,
        total_questions: questions.len(),
    }))
}

async fn search(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> ApiResult<SearchPayload> {
    let term = match body.search_term {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::NotFound),
    };

    let results = search_questions(&pool, &term).await?;
    let current = paginate(&results, page.unwrap_or(1)).to_vec();
    Ok(Json(SearchPayload {
        success: true,
        questions: current,
        total_questions: results.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(add_question))
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(remove_question))
        .with_state(state)
}
