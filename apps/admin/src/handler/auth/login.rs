//! ログイン画面・ログインハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};

use super::{AuthState, LoginForm, LoginPageData, LoginPageQuery, attempt_target, sanitize_attempt};
use crate::{
    client::{BackendError, Credentials, LoginRequest},
    error::{authentication_failed_response, log_and_convert_backend_error},
};

/// GET /login
///
/// ログイン画面のビューモデルを返す。`attempt` は安全なパスの場合のみ引き継ぐ。
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<LoginPageData> {
    Json(LoginPageData {
        attempt: sanitize_attempt(query.attempt.as_deref()).map(str::to_string),
    })
}

/// POST /login
///
/// 資格情報をバックエンドの `POST /login` に転送する。
///
/// ## レスポンス
///
/// - 成功: 識別情報をセッションコンテキストに保存し、バックエンドの
///   `Set-Cookie` を中継して `attempt`（不正な値なら `/`）へ 303
/// - フィールド単位のバリデーションエラー: 400 でフィールドを中継
/// - その他の拒否: 401
///
/// ```json
/// {
///   "email": "admin@example.com",
///   "password": "password123",
///   "attempt": "/posts"
/// }
/// ```
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    credentials: Credentials,
    Json(form): Json<LoginForm>,
) -> Response {
    let req = LoginRequest {
        email:    form.email,
        password: form.password,
    };

    match state.backend_client.login(&credentials, &req).await {
        Ok(outcome) => {
            tracing::info!(user.id = %outcome.identity.id, "ログインしました");
            state.session.store(outcome.identity);

            let mut response = Redirect::to(attempt_target(form.attempt.as_deref())).into_response();
            let headers = response.headers_mut();
            for cookie in outcome.set_cookies {
                headers.append(header::SET_COOKIE, cookie);
            }
            response
        }
        Err(e @ BackendError::Validation { .. }) if has_field_errors(&e) => e.into_response(),
        Err(BackendError::Unauthorized | BackendError::Forbidden(_) | BackendError::Validation { .. }) => {
            tracing::info!(error.kind = "login_rejected", "ログインがバックエンドに拒否されました");
            authentication_failed_response()
        }
        Err(e) => log_and_convert_backend_error("ログイン", e),
    }
}

fn has_field_errors(err: &BackendError) -> bool {
    matches!(err, BackendError::Validation { fields, .. } if !fields.is_empty())
}
