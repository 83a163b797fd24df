//! # オブジェクト一覧レスポンス
//!
//! コンテンツバックエンドが一覧 API で返すページ番号ベースのページネーション形式。

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// 前後ページへのリンク
///
/// 各リンクはバックエンドが組み立てた URL で、端のページでは `null` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// ページネーション付きのオブジェクト一覧
///
/// ## JSON 形式
///
/// ```json
/// {
///   "count": 42,
///   "links": { "next": "/_api/posts/?page=2", "prev": null },
///   "objects": [...]
/// }
/// ```
///
/// `count` は全件数であり、`objects` の件数ではない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectList<T> {
    pub count:   u64,
    pub links:   PaginationLinks,
    pub objects: Vec<T>,
}

impl<T> ObjectList<T> {
    /// 次のページが存在するか
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }

    /// 前のページが存在するか
    pub fn has_prev(&self) -> bool {
        self.links.prev.is_some()
    }
}

/// 一覧取得のページ指定
///
/// どちらも 1 以上。省略時はバックエンドの既定値に従う。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page:     Option<NonZeroU32>,
    pub per_page: Option<NonZeroU32>,
}

impl Paging {
    /// クエリ文字列（先頭の `?` を含まない）に変換する
    ///
    /// 指定がない場合は空文字列を返す。
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(format!("per_page={per_page}"));
        }
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_バックエンドの一覧レスポンスをデシリアライズする() {
        let json = r#"{
            "count": 3,
            "links": { "next": "/_api/posts/?page=2&per_page=2", "prev": null },
            "objects": ["a", "b"]
        }"#;

        let list: ObjectList<String> = serde_json::from_str(json).unwrap();

        assert_eq!(list.count, 3);
        assert_eq!(list.objects, vec!["a".to_string(), "b".to_string()]);
        assert!(list.has_next());
        assert!(!list.has_prev());
    }

    #[test]
    fn test_linksが欠けているとエラーになる() {
        let json = r#"{ "count": 0, "objects": [] }"#;

        let result: Result<ObjectList<String>, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_pagingのクエリ文字列() {
        assert_eq!(Paging::default().to_query(), "");
        assert_eq!(
            Paging {
                page:     NonZeroU32::new(2),
                per_page: None,
            }
            .to_query(),
            "page=2"
        );
        assert_eq!(
            Paging {
                page:     NonZeroU32::new(3),
                per_page: NonZeroU32::new(20),
            }
            .to_query(),
            "page=3&per_page=20"
        );
    }

    #[test]
    fn test_0ページはデシリアライズできない() {
        let result: Result<Paging, _> = serde_json::from_str(r#"{ "page": 0 }"#);

        assert!(result.is_err());
    }
}
