//! # キャッシュ制御ミドルウェア
//!
//! 管理画面のレスポンスはログイン状態に依存するため、ブラウザや中間プロキシに
//! 保存させない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// `Cache-Control` を指定していないレスポンスに `no-store` を付与する
pub async fn no_store(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .entry(header::CACHE_CONTROL)
        .or_insert(HeaderValue::from_static("no-store"));
    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::Request, middleware::from_fn, routing::get};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route(
                "/cached",
                get(|| async { ([(header::CACHE_CONTROL, "max-age=60")], "ok") }),
            )
            .layer(from_fn(no_store))
    }

    #[tokio::test]
    async fn test_no_storeを付与する() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn test_ハンドラが指定したcache_controlは上書きしない() {
        let response = app()
            .oneshot(Request::builder().uri("/cached").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()[header::CACHE_CONTROL], "max-age=60");
    }
}
