//! # ブログ記事とカテゴリ
//!
//! バックエンドが返す記事・カテゴリの形と、編集フォームから
//! バックエンドへ送るペイロードへの変換を定義する。
//!
//! ## 送信前の変換
//!
//! 編集フォームは記事をバックエンドから受け取った形のまま扱うため、
//! `id`・`created_at` やカテゴリのオブジェクトを含む。
//! バックエンドに送る前にそれらを取り除き、カテゴリは ID のリストに置き換える。
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use quanweb_domain::blog::PostForm;
//!
//! let form: PostForm = serde_json::from_str(r#"{
//!     "id": "0190f3a5-8c6e-7d2a-9b1f-3c4d5e6f7a8b",
//!     "title": "Hello",
//!     "slug": "hello",
//!     "created_at": "2024-05-01T09:30:00Z",
//!     "categories": [
//!         { "id": "0190f3a5-8c6e-7d2a-9b1f-000000000001", "title": "Rust", "slug": "rust" }
//!     ]
//! }"#)?;
//!
//! let payload = serde_json::to_value(form.into_payload()?)?;
//! assert!(payload.get("id").is_none());
//! assert!(payload.get("created_at").is_none());
//! assert_eq!(payload["categories"][0], "0190f3a5-8c6e-7d2a-9b1f-000000000001");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, datetime};

define_uuid_id! {
    /// ブログ記事 ID
    pub struct PostId;
}

define_uuid_id! {
    /// カテゴリ ID
    pub struct CategoryId;
}

/// カテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id:    CategoryId,
    pub title: String,
    pub slug:  String,
}

/// ブログ記事（バックエンドのレスポンス形）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id:           PostId,
    pub title:        String,
    pub slug:         String,
    #[serde(default)]
    pub body:         Option<String>,
    #[serde(default)]
    pub excerpt:      Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at:   DateTime<Utc>,
    #[serde(default)]
    pub updated_at:   Option<DateTime<Utc>>,
    pub categories:   Vec<Category>,
}

/// ブログ記事の編集フォーム
///
/// 新規作成時は `id` と `created_at` を持たない。
/// 日時はフォームの `datetime-local` 形式も受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub id:           Option<PostId>,
    pub title:        String,
    pub slug:         String,
    #[serde(default)]
    pub body:         Option<String>,
    #[serde(default)]
    pub excerpt:      Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    pub created_at:   Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories:   Vec<Category>,
}

/// バックエンドへ送るブログ記事のペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub title:        String,
    pub slug:         String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt:      Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub categories:   Vec<CategoryId>,
}

impl PostForm {
    /// 送信用ペイロードに変換する
    ///
    /// `id`・`created_at` を取り除き、カテゴリを ID のリストに置き換える。
    ///
    /// # エラー
    ///
    /// カテゴリが 1 つも指定されていない場合は `DomainError::Validation` を返す。
    pub fn into_payload(self) -> Result<PostPayload, DomainError> {
        if self.categories.is_empty() {
            return Err(DomainError::Validation(
                "カテゴリを 1 つ以上指定してください".to_string(),
            ));
        }

        Ok(PostPayload {
            title:        self.title,
            slug:         self.slug,
            body:         self.body,
            excerpt:      self.excerpt,
            is_published: self.is_published,
            published_at: self.published_at,
            categories:   self.categories.into_iter().map(|c| c.id).collect(),
        })
    }
}

/// カテゴリの編集フォーム
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub id:    Option<CategoryId>,
    pub title: String,
    pub slug:  String,
}

/// バックエンドへ送るカテゴリのペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    pub title: String,
    pub slug:  String,
}

impl CategoryForm {
    /// 送信用ペイロードに変換する（`id` を取り除く）
    pub fn into_payload(self) -> CategoryPayload {
        CategoryPayload {
            title: self.title,
            slug:  self.slug,
        }
    }
}
