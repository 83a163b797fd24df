//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    routing::{get, post},
};
use quanweb_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    compression::CompressionLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::BackendClient,
    error::not_found_response,
    guard::{AllowList, SessionGuard},
    handler::{
        AuthState,
        BlogState,
        MinorState,
        create_category,
        create_post,
        create_presentation,
        delete_category,
        delete_post,
        get_category,
        get_post,
        get_presentation,
        health_check,
        home,
        list_books,
        list_categories,
        list_posts,
        list_presentations,
        login,
        login_page,
        logout,
        update_category,
        update_post,
        update_presentation,
    },
    middleware::{SessionGuardState, no_store, request_id::store_request_id, require_session},
    routes::RouteTable,
    session::SessionContext,
};

/// ルーターを構築する
///
/// クライアントは具象型で受け取り、各 State に必要なトレイトオブジェクトへ coerce する。
/// セッションコンテキストはアプリケーションごとに 1 つ作成し、ガードと認証ハンドラで共有する。
pub fn build_app<C>(backend_client: Arc<C>) -> Router
where
    C: BackendClient + 'static,
{
    let session = Arc::new(SessionContext::new());

    let guard_state = SessionGuardState {
        guard:   Arc::new(SessionGuard::new(
            backend_client.clone(),
            AllowList::default(),
        )),
        session: session.clone(),
        routes:  Arc::new(RouteTable::admin()),
    };

    let auth_state = Arc::new(AuthState {
        backend_client: backend_client.clone(),
        session,
    });
    let blog_state = Arc::new(BlogState {
        backend_client: backend_client.clone(),
    });
    let minor_state = Arc::new(MinorState { backend_client });

    Router::new()
        .route("/health", get(health_check))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .route("/", get(home))
        .with_state(auth_state)
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .with_state(blog_state)
        .route(
            "/presentations",
            get(list_presentations).post(create_presentation),
        )
        .route(
            "/presentations/{id}",
            get(get_presentation).patch(update_presentation),
        )
        .route("/books", get(list_books))
        .with_state(minor_state)
        .fallback(fallback)
        // ルートテーブルでルート名を解決し、許可リスト外なら再検証する
        .layer(from_fn_with_state(guard_state, require_session))
        .layer(from_fn(no_store))
        .layer(CompressionLayer::new())
        // 下に書いたものが外側:
        // SetRequestIdLayer → TraceLayer → PropagateRequestIdLayer → store_request_id
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn fallback() -> Response {
    not_found_response("ページが見つかりません")
}
