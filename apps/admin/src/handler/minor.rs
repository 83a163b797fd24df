//! # プレゼンテーション・書籍ハンドラ
//!
//! - `GET /presentations` - プレゼンテーション一覧
//! - `POST /presentations` - プレゼンテーション登録
//! - `GET /presentations/{id}` - プレゼンテーション取得
//! - `PATCH /presentations/{id}` - プレゼンテーション更新
//! - `GET /books` - 書籍一覧

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quanweb_domain::minor::{Presentation, PresentationId};
use quanweb_shared::Paging;

use crate::{
    client::{BackendMinorClient, Credentials},
    error::log_and_convert_backend_error,
};

/// プレゼンテーション・書籍ハンドラの共有状態
pub struct MinorState {
    pub backend_client: Arc<dyn BackendMinorClient>,
}

/// GET /presentations
#[tracing::instrument(skip_all)]
pub async fn list_presentations(
    State(state): State<Arc<MinorState>>,
    credentials: Credentials,
    Query(paging): Query<Paging>,
) -> Response {
    match state
        .backend_client
        .list_presentations(&credentials, paging)
        .await
    {
        Ok(list) => Json(list).into_response(),
        Err(e) => log_and_convert_backend_error("プレゼンテーション一覧取得", e),
    }
}

/// POST /presentations
#[tracing::instrument(skip_all)]
pub async fn create_presentation(
    State(state): State<Arc<MinorState>>,
    credentials: Credentials,
    Json(form): Json<Presentation>,
) -> Response {
    match state
        .backend_client
        .create_presentation(&credentials, &form.into_payload())
        .await
    {
        Ok(presentation) => (StatusCode::CREATED, Json(presentation)).into_response(),
        Err(e) => log_and_convert_backend_error("プレゼンテーション登録", e),
    }
}

/// GET /presentations/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_presentation(
    State(state): State<Arc<MinorState>>,
    credentials: Credentials,
    Path(id): Path<PresentationId>,
) -> Response {
    match state.backend_client.get_presentation(&credentials, id).await {
        Ok(presentation) => Json(presentation).into_response(),
        Err(e) => log_and_convert_backend_error("プレゼンテーション取得", e),
    }
}

/// PATCH /presentations/{id}
///
/// フォームに含まれる `id` は無視し、パスの ID を使う。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_presentation(
    State(state): State<Arc<MinorState>>,
    credentials: Credentials,
    Path(id): Path<PresentationId>,
    Json(form): Json<Presentation>,
) -> Response {
    match state
        .backend_client
        .update_presentation(&credentials, id, &form.into_payload())
        .await
    {
        Ok(presentation) => Json(presentation).into_response(),
        Err(e) => log_and_convert_backend_error("プレゼンテーション更新", e),
    }
}

/// GET /books
#[tracing::instrument(skip_all)]
pub async fn list_books(
    State(state): State<Arc<MinorState>>,
    credentials: Credentials,
    Query(paging): Query<Paging>,
) -> Response {
    match state.backend_client.list_books(&credentials, paging).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => log_and_convert_backend_error("書籍一覧取得", e),
    }
}
