//! # Request ID の伝播
//!
//! 管理ホストが受け付けたリクエストの Request ID を、コンテンツバックエンドへの
//! 呼び出しにも `x-request-id` として付与する。
//!
//! 1. `SetRequestIdLayer` がリクエストに [`RequestId`] を設定する
//! 2. [`store_request_id`] がその値を task-local に保存する
//! 3. バックエンド クライアントが [`inject_request_id`] でヘッダーに載せる
//!
//! クライアントのメソッド引数には現れないため、ハンドラは Request ID を意識しない。

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use quanweb_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
    static REQUEST_ID: Option<HeaderValue>;
}

/// 処理中のリクエストの Request ID
///
/// task-local のスコープ外、または `SetRequestIdLayer` を通っていない場合は `None`。
pub fn current_request_id() -> Option<HeaderValue> {
    REQUEST_ID.try_with(Clone::clone).ok().flatten()
}

/// Request ID を task-local に保存してから後続を実行する
pub async fn store_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.header_value().clone());

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// バックエンドへのリクエストに `x-request-id` を付与する
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match current_request_id() {
        Some(id) => builder.header(REQUEST_ID_HEADER, id),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build() -> reqwest::Request {
        inject_request_id(reqwest::Client::new().get("http://localhost:3721/_api/users/me"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_スコープ外ではnoneを返す() {
        assert_eq!(current_request_id(), None);
    }

    #[tokio::test]
    async fn test_スコープ内ではバックエンドへのリクエストにヘッダーを付与する() {
        let request = REQUEST_ID
            .scope(Some(HeaderValue::from_static("req-123")), async { build() })
            .await;

        assert_eq!(request.headers()[REQUEST_ID_HEADER], "req-123");
    }

    #[tokio::test]
    async fn test_request_idがなければヘッダーを付与しない() {
        let request = REQUEST_ID.scope(None, async { build() }).await;

        assert!(request.headers().get(REQUEST_ID_HEADER).is_none());
    }
}
