use crate::dtos::{InsertArticleResponse, SearchParams};
use crate::models::Article;
use crate::services::record_request;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;

pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    record_request("list_articles");

    let articles = state.db.find_all().await?;

    tracing::info!(count = articles.len(), "Listed articles");
    Ok(Json(articles))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    record_request("get_article");

    let article = state.db.find_by_id(&id).await?;

    Ok(Json(article))
}

pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    record_request("search_articles");

    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing query parameter `q`")))?;

    let articles = state.db.search(query).await?;

    tracing::info!(query = %query, count = articles.len(), "Searched articles");
    Ok(Json(articles))
}

// WithRejection turns a body that fails to decode (invalid JSON, wrong
// field types, malformed Creation_Timestamp) into a structured 400 instead
// of axum's plain-text rejection.
pub async fn create_article(
    State(state): State<AppState>,
    WithRejection(Json(article), _): WithRejection<Json<Article>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    record_request("create_article");

    let result = state.db.insert(&article).await?;
    let response = InsertArticleResponse::from(result);

    tracing::info!(
        inserted_id = %response.inserted_id,
        article_id = article.id.as_deref().unwrap_or("<none>"),
        "Article created"
    );
    Ok(Json(response))
}
