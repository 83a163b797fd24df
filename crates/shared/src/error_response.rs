//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 管理ホストが返すエラーレスポンスの共通構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はアプリ側の責務（shared に axum 依存を入れない）
//! - フォームのフィールド単位のエラーは `fields` 拡張メンバーで返す

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://quanweb.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
/// `fields` はバリデーションエラー時のみ出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields:     Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"post-not-found"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
            fields: None,
        }
    }

    /// フィールド単位のエラーを付与する
    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// 401 Unauthorized
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new("unauthorized", "Unauthorized", 401, detail)
    }

    /// 403 Forbidden
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new("forbidden", "Forbidden", 403, detail)
    }

    /// 404 Not Found
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not-found", "Not Found", 404, detail)
    }

    /// 400 Validation Error
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new("validation-error", "Validation Error", 400, detail)
    }

    /// 502 Bad Gateway
    ///
    /// コンテンツバックエンドとの通信失敗・不正な応答に使用する。
    pub fn bad_gateway() -> Self {
        Self::new(
            "bad-gateway",
            "Bad Gateway",
            502,
            "バックエンドから正しい応答を得られませんでした",
        )
    }
}
