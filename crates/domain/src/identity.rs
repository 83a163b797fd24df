//! # 識別情報（Identity）
//!
//! バックエンドの「現在のユーザー」エンドポイントが返す、ログイン中ユーザーの
//! 最小限のプロフィールを定義する。
//!
//! `{ "id": <UUID 文字列>, "email": <メールアドレス> }` 以外の形は
//! デシリアライズの時点で拒否される。

use serde::{Deserialize, Serialize};

use crate::DomainError;

define_uuid_id! {
    /// ユーザー ID
    pub struct UserId;
}

/// メールアドレスの最大長
const EMAIL_MAX_LENGTH: usize = 255;

/// メールアドレス（値オブジェクト）
///
/// 生成時とデシリアライズ時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 空白を含まない
    /// - `local@domain` の形式で、`@` はちょうど 1 つ
    /// - ドメイン部は `.` を含み、`.` で始まらず終わらない
    /// - 最大 255 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        if value.len() > EMAIL_MAX_LENGTH {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        let invalid = || DomainError::Validation(format!("メールアドレスの形式が不正です: {value}"));

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(invalid());
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ログイン中ユーザーの識別情報
///
/// # 不変条件
///
/// - `id` は UUID
/// - `email` はメールアドレス形式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id:    UserId,
    pub email: Email,
}

impl Identity {
    pub fn new(id: UserId, email: Email) -> Self {
        Self { id, email }
    }
}
