//! # ブログ管理ハンドラ
//!
//! 記事とカテゴリの CRUD をコンテンツバックエンドへ中継する。
//!
//! ## エンドポイント
//!
//! - `GET /posts?page&per_page` - 記事一覧
//! - `POST /posts` - 記事作成
//! - `GET /posts/{id}` - 記事詳細
//! - `PATCH /posts/{id}` - 記事更新
//! - `DELETE /posts/{id}` - 記事削除
//! - `/categories` 以下も同じ構成
//!
//! 記事フォームは送信前に送信用ペイロードへ変換する（`id`・`created_at` を除き、
//! カテゴリを ID のリストにする）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quanweb_domain::blog::{CategoryForm, CategoryId, PostForm, PostId};
use quanweb_shared::Paging;

use crate::{
    client::{BackendBlogClient, Credentials},
    error::{domain_error_response, log_and_convert_backend_error},
};

/// ブログ管理ハンドラの共有状態
pub struct BlogState {
    pub backend_client: Arc<dyn BackendBlogClient>,
}

// --- 記事 ---

/// GET /posts
#[tracing::instrument(skip_all)]
pub async fn list_posts(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Query(paging): Query<Paging>,
) -> Response {
    match state.backend_client.list_posts(&credentials, paging).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => log_and_convert_backend_error("記事一覧取得", e),
    }
}

/// GET /posts/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_post(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<PostId>,
) -> Response {
    match state.backend_client.get_post(&credentials, id).await {
        Ok(post) => Json(post).into_response(),
        Err(e) => log_and_convert_backend_error("記事取得", e),
    }
}

/// POST /posts
///
/// 作成に成功すると 201 と作成された記事を返す。
#[tracing::instrument(skip_all)]
pub async fn create_post(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Json(form): Json<PostForm>,
) -> Response {
    let payload = match form.into_payload() {
        Ok(p) => p,
        Err(e) => return domain_error_response(&e),
    };

    match state.backend_client.create_post(&credentials, &payload).await {
        Ok(post) => {
            tracing::info!(post.id = %post.id, "記事を作成しました");
            (StatusCode::CREATED, Json(post)).into_response()
        }
        Err(e) => log_and_convert_backend_error("記事作成", e),
    }
}

/// PATCH /posts/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_post(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<PostId>,
    Json(form): Json<PostForm>,
) -> Response {
    let payload = match form.into_payload() {
        Ok(p) => p,
        Err(e) => return domain_error_response(&e),
    };

    match state
        .backend_client
        .update_post(&credentials, id, &payload)
        .await
    {
        Ok(post) => Json(post).into_response(),
        Err(e) => log_and_convert_backend_error("記事更新", e),
    }
}

/// DELETE /posts/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_post(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<PostId>,
) -> Response {
    match state.backend_client.delete_post(&credentials, id).await {
        Ok(()) => {
            tracing::info!("記事を削除しました");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => log_and_convert_backend_error("記事削除", e),
    }
}

// --- カテゴリ ---

/// GET /categories
#[tracing::instrument(skip_all)]
pub async fn list_categories(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Query(paging): Query<Paging>,
) -> Response {
    match state
        .backend_client
        .list_categories(&credentials, paging)
        .await
    {
        Ok(list) => Json(list).into_response(),
        Err(e) => log_and_convert_backend_error("カテゴリ一覧取得", e),
    }
}

/// GET /categories/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_category(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<CategoryId>,
) -> Response {
    match state.backend_client.get_category(&credentials, id).await {
        Ok(category) => Json(category).into_response(),
        Err(e) => log_and_convert_backend_error("カテゴリ取得", e),
    }
}

/// POST /categories
#[tracing::instrument(skip_all)]
pub async fn create_category(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Json(form): Json<CategoryForm>,
) -> Response {
    match state
        .backend_client
        .create_category(&credentials, &form.into_payload())
        .await
    {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => log_and_convert_backend_error("カテゴリ作成", e),
    }
}

/// PATCH /categories/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_category(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<CategoryId>,
    Json(form): Json<CategoryForm>,
) -> Response {
    match state
        .backend_client
        .update_category(&credentials, id, &form.into_payload())
        .await
    {
        Ok(category) => Json(category).into_response(),
        Err(e) => log_and_convert_backend_error("カテゴリ更新", e),
    }
}

/// DELETE /categories/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_category(
    State(state): State<Arc<BlogState>>,
    credentials: Credentials,
    Path(id): Path<CategoryId>,
) -> Response {
    match state.backend_client.delete_category(&credentials, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => log_and_convert_backend_error("カテゴリ削除", e),
    }
}
