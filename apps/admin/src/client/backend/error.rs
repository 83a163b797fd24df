//! コンテンツバックエンド クライアントのエラー型

use std::collections::BTreeMap;

use thiserror::Error;

/// コンテンツバックエンド クライアントエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// 未認証（401）
    #[error("認証されていません")]
    Unauthorized,

    /// 権限不足（403）
    #[error("権限がありません: {0}")]
    Forbidden(String),

    /// リソースが見つからない（404）
    #[error("リソースが見つかりません")]
    NotFound,

    /// バリデーションエラー（400 / 422）
    #[error("バリデーションエラー: {message}")]
    Validation {
        message: String,
        fields:  BTreeMap<String, String>,
    },

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// レスポンスボディが期待する形ではない
    #[error("レスポンスの形式が不正です: {0}")]
    Schema(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Network(err.to_string())
    }
}
