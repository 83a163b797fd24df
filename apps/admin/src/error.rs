//! # 管理ホストのエラーハンドリング
//!
//! バックエンド クライアントやドメインのエラーを、RFC 9457 形式の
//! エラーレスポンスに変換する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quanweb_domain::DomainError;
use quanweb_shared::ErrorResponse;

use crate::client::BackendError;

// --- IntoResponse for BackendError ---

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            BackendError::Unauthorized => unauthorized_response(),
            BackendError::Forbidden(ref detail) => forbidden_response(detail),
            BackendError::NotFound => not_found_response("リソースが見つかりません"),
            BackendError::Validation { message, fields } => {
                let mut body = ErrorResponse::validation_error(message);
                if !fields.is_empty() {
                    body = body.with_fields(fields);
                }
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            BackendError::Network(_) | BackendError::Schema(_) | BackendError::Unexpected(_) => {
                bad_gateway_response()
            }
        }
    }
}

/// バックエンドのエラーをログ付きでレスポンスに変換する
///
/// 通信エラー・不正な応答はコンテキスト付きで `tracing::error!` を出力する。
pub fn log_and_convert_backend_error(context: &str, err: BackendError) -> Response {
    match &err {
        BackendError::Network(_) | BackendError::Unexpected(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "service_communication",
                "{}で通信エラー: {}",
                context,
                err
            );
        }
        BackendError::Schema(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "schema_mismatch",
                "{}で不正な応答: {}",
                context,
                err
            );
        }
        _ => {}
    }
    err.into_response()
}

/// ドメインのバリデーションエラーを 400 に変換する
pub fn domain_error_response(err: &DomainError) -> Response {
    match err {
        DomainError::Validation(detail) => validation_error_response(detail),
    }
}

// --- レスポンスヘルパー ---

/// 未認証レスポンス
pub fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::unauthorized("認証が必要です")),
    )
        .into_response()
}

/// ログイン失敗レスポンス
pub fn authentication_failed_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(
            "authentication-failed",
            "Authentication Failed",
            401,
            "メールアドレスまたはパスワードが正しくありません",
        )),
    )
        .into_response()
}

/// 403 Forbidden レスポンス
pub fn forbidden_response(detail: &str) -> Response {
    (StatusCode::FORBIDDEN, Json(ErrorResponse::forbidden(detail))).into_response()
}

/// 404 Not Found レスポンス
pub fn not_found_response(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(detail))).into_response()
}

/// バリデーションエラーレスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// 502 Bad Gateway レスポンス
pub fn bad_gateway_response() -> Response {
    (StatusCode::BAD_GATEWAY, Json(ErrorResponse::bad_gateway())).into_response()
}
