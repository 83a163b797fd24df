//! # 日時文字列の変換
//!
//! バックエンドは RFC 3339 形式で日時を返すが、管理画面のフォーム
//! （`datetime-local` 入力）はオフセットなしの `YYYY-MM-DDTHH:MM[:SS]` を送ってくる。
//! どちらも UTC の [`DateTime`] に揃える。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::DomainError;

/// オフセットなしで受け付ける書式
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 日時文字列を UTC の日時に変換する
///
/// オフセットなしの値は UTC として解釈する。
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, DomainError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Validation(format!("日時の形式が不正です: {value}")))
}

/// フォームの任意日時フィールド用のデシリアライザ
///
/// `null`・未指定・空文字列は `None` として扱う。
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Form {
///     #[serde(default, deserialize_with = "quanweb_domain::datetime::deserialize_optional")]
///     published_at: Option<DateTime<Utc>>,
/// }
///
/// let form: Form = serde_json::from_str(r#"{"published_at": "2024-05-01T09:30"}"#).unwrap();
/// assert!(form.published_at.is_some());
/// ```
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_datetime(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
