//! # プレゼンテーションと書籍
//!
//! ブログ以外の小さなコンテンツ。フォームの初期値として使えるよう、
//! 欠けたフィールドは空文字列または `None` で補う。

use serde::{Deserialize, Serialize};

define_uuid_id! {
    /// プレゼンテーション ID
    pub struct PresentationId;
}

define_uuid_id! {
    /// 書籍 ID
    pub struct BookId;
}

define_uuid_id! {
    /// 著者 ID
    pub struct BookAuthorId;
}

/// プレゼンテーション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    pub id:    Option<PresentationId>,
    pub title: String,
    pub url:   String,
    pub event: Option<String>,
}

/// バックエンドへ送るプレゼンテーションのペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationPayload {
    pub title: String,
    pub url:   String,
    pub event: Option<String>,
}

impl Presentation {
    /// 送信用ペイロードに変換する（`id` を取り除き、空の `event` は `None` にする）
    pub fn into_payload(self) -> PresentationPayload {
        PresentationPayload {
            title: self.title,
            url:   self.url,
            event: self.event.filter(|e| !e.trim().is_empty()),
        }
    }
}

/// 書籍の著者
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookAuthor {
    pub id:   Option<BookAuthorId>,
    pub name: String,
}

/// 書籍
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id:           Option<BookId>,
    pub title:        String,
    pub download_url: Option<String>,
    pub author:       Option<BookAuthor>,
}
