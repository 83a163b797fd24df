//! # セッションガード ミドルウェア
//!
//! [`SessionGuard`] の判定を HTTP レスポンスに変換する。
//!
//! - 続行: 後続のハンドラを実行する。再検証済みの [`Identity`] は
//!   リクエストの extensions から取得できる
//! - リダイレクト: `GET` / `HEAD` は `303 See Other` で `/login?attempt=...` へ、
//!   それ以外のメソッドは `401` とリダイレクト指示を含む JSON を返す
//!
//! ## 使い方
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/posts", get(list_posts))
//!     .layer(from_fn_with_state(guard_state, require_session))
//! ```
//!
//! [`Identity`]: quanweb_domain::identity::Identity

use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use quanweb_shared::ErrorResponse;
use serde::Serialize;

use crate::{
    client::Credentials,
    guard::{GuardDecision, LoginRedirect, NavigationIntent, SessionGuard},
    routes::RouteTable,
    session::SessionContext,
};

/// セッションガード ミドルウェアの状態
#[derive(Clone)]
pub struct SessionGuardState {
    pub guard:   Arc<SessionGuard>,
    pub session: Arc<SessionContext>,
    pub routes:  Arc<RouteTable>,
}

/// 画面遷移以外のリクエストに返す 401 のボディ
#[derive(Debug, Serialize)]
struct LoginRequiredBody {
    #[serde(flatten)]
    problem:  ErrorResponse,
    redirect: LoginRedirect,
}

/// ナビゲーションごとにセッションを再検証するミドルウェア
///
/// ブラウザの `Cookie` をそのままバックエンドへ転送して再検証する。
pub async fn require_session(
    State(state): State<SessionGuardState>,
    mut request: Request,
    next: Next,
) -> Response {
    let intent = NavigationIntent::resolve(
        &state.routes,
        request.uri().path(),
        request.uri().query(),
    );
    let credentials = Credentials::from_headers(request.headers());

    match state.guard.check(&intent, &credentials, &state.session).await {
        GuardDecision::Bypass => next.run(request).await,
        GuardDecision::Authenticated(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        GuardDecision::RedirectToLogin(redirect) => {
            login_required_response(request.method(), redirect)
        }
    }
}

fn login_required_response(method: &Method, redirect: LoginRedirect) -> Response {
    if method == Method::GET || method == Method::HEAD {
        return Redirect::to(&redirect.location()).into_response();
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(LoginRequiredBody {
            problem: ErrorResponse::unauthorized("ログインが必要です"),
            redirect,
        }),
    )
        .into_response()
}
