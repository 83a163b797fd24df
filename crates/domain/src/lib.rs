//! # quanweb ドメイン層
//!
//! 管理画面が扱うモデルと、バックエンド境界でのスキーマ検証を定義する。
//!
//! ## 設計方針
//!
//! - **境界での検証**: バックエンドの JSON は型付きの値へデシリアライズした時点で
//!   検証され、不正なデータがアプリケーションロジックに流れ込まない
//! - **Newtype パターン**: ID やメールアドレスはプリミティブをラップする
//! - **送信用ペイロードの分離**: 編集フォームの値と、バックエンドへ送る値を別の型にする
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層のエラー
//! - [`identity`] - ログイン中ユーザーの識別情報
//! - [`blog`] - ブログ記事とカテゴリ
//! - [`minor`] - プレゼンテーションと書籍
//! - [`datetime`] - 日時文字列の変換
//!
//! ## 使用例
//!
//! ```rust
//! use quanweb_domain::identity::Identity;
//!
//! let json = r#"{"id": "0190f3a5-8c6e-7d2a-9b1f-3c4d5e6f7a8b", "email": "admin@example.com"}"#;
//! let identity: Identity = serde_json::from_str(json).unwrap();
//! assert_eq!(identity.email.as_str(), "admin@example.com");
//! ```

#[macro_use]
mod macros;

pub mod blog;
pub mod datetime;
pub mod error;
pub mod identity;
pub mod minor;

pub use error::DomainError;
