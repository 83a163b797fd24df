//! コンテンツバックエンド レスポンスの共通ハンドリング

use std::collections::BTreeMap;

use serde::{Deserialize, de::DeserializeOwned};

use super::error::BackendError;

/// バリデーションエラーで `message` がない場合の既定メッセージ
const DEFAULT_VALIDATION_MESSAGE: &str = "入力内容を確認してください";

/// バックエンドのエラーボディ
///
/// フィールド単位のエラーは `fields`、それ以外は `message`（古い API では `detail`）で返る。
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    fields:  Option<BTreeMap<String, String>>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail:  Option<String>,
}

impl ErrorBody {
    fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    fn message(&self) -> Option<String> {
        self.message.clone().or_else(|| self.detail.clone())
    }
}

/// 成功レスポンスのボディを `T` として検証しつつデシリアライズする
///
/// エラー時はステータスコードに応じた `BackendError` を返す。
/// ボディが `T` の形に合わない場合は `BackendError::Schema` を返す。
pub(super) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        return serde_json::from_slice(&bytes).map_err(|e| BackendError::Schema(e.to_string()));
    }

    Err(error_from_response(response).await)
}

/// ボディを使わない成功レスポンス（204 等）を扱う
pub(super) async fn handle_empty_response(response: reqwest::Response) -> Result<(), BackendError> {
    if response.status().is_success() {
        return Ok(());
    }

    Err(error_from_response(response).await)
}

/// 失敗レスポンスを `BackendError` に変換する
async fn error_from_response(response: reqwest::Response) -> BackendError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    match status {
        reqwest::StatusCode::UNAUTHORIZED => BackendError::Unauthorized,
        reqwest::StatusCode::NOT_FOUND => BackendError::NotFound,
        reqwest::StatusCode::FORBIDDEN => {
            BackendError::Forbidden(ErrorBody::parse(&text).message().unwrap_or(text))
        }
        reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
            let body = ErrorBody::parse(&text);
            BackendError::Validation {
                message: body
                    .message()
                    .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
                fields:  body.fields.unwrap_or_default(),
            }
        }
        _ => BackendError::Unexpected(format!("予期しないステータス {}: {}", status, text)),
    }
}
