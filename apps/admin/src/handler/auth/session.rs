//! ログアウト・現在のユーザー ハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};

use super::AuthState;
use crate::{client::Credentials, error::unauthorized_response, routes::LOGIN_PATH};

/// POST /logout
///
/// バックエンドの `POST /logout` を呼び出し、セッションコンテキストをクリアして
/// `/login` へ 303 で遷移させる。
///
/// バックエンドの失敗はログに残すだけで、ローカルの状態は必ずクリアする。
#[tracing::instrument(skip_all)]
pub async fn logout(State(state): State<Arc<AuthState>>, credentials: Credentials) -> Response {
    let set_cookies = match state.backend_client.logout(&credentials).await {
        Ok(cookies) => cookies,
        Err(e) => {
            tracing::warn!(
                error.category = "external_service",
                error.kind = "logout",
                "バックエンドのログアウトに失敗しました: {}",
                e
            );
            Vec::new()
        }
    };

    state.session.clear();

    let mut response = Redirect::to(LOGIN_PATH).into_response();
    let headers = response.headers_mut();
    for cookie in set_cookies {
        headers.append(header::SET_COOKIE, cookie);
    }
    response
}

/// GET /
///
/// セッションコンテキストの識別情報を返す。
/// 直前にセッションガードが再検証して保存した値を読む。
pub async fn home(State(state): State<Arc<AuthState>>) -> Response {
    match state.session.current() {
        Some(identity) => Json(identity).into_response(),
        None => unauthorized_response(),
    }
}
