//! # quanweb 共有ユーティリティ
//!
//! 管理ホスト（admin）が使用する、ドメインに依存しないユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ構造とヘルパーのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各アプリの責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod error_response;
pub mod object_list;
pub mod observability;

pub use error_response::ErrorResponse;
pub use object_list::{ObjectList, PaginationLinks, Paging};
