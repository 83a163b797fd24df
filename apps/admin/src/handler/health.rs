//! # ヘルスチェックハンドラ
//!
//! 管理ホストの稼働状態を確認するためのエンドポイント。
//! セッションガードの許可リストに含まれ、バックエンドには問い合わせない。

use axum::Json;
use serde::{Deserialize, Serialize};

/// ヘルスチェックのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status:  String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
