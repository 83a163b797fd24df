//! # コンテンツバックエンド クライアント
//!
//! 管理ホストからコンテンツバックエンド（`/_api`）への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /users/me` - 現在のユーザー（セッションの再検証）
//! - `POST /login`, `POST /logout` - ログイン・ログアウト
//! - `/posts/`, `/posts/{id}` - ブログ記事
//! - `/categories/`, `/categories/{id}` - カテゴリ
//! - `/presentations/`, `/books/` - プレゼンテーション・書籍
//!
//! すべての呼び出しはブラウザから受け取った Cookie をそのまま転送する。
//! セッションの実体はバックエンドが持ち、管理ホストは保持しない。

mod blog_client;
mod client_impl;
mod credentials;
mod error;
mod minor_client;
mod response;
mod user_client;

pub use blog_client::BackendBlogClient;
pub use client_impl::{BackendClient, BackendClientImpl};
pub use credentials::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, Credentials};
pub use error::BackendError;
pub use minor_client::BackendMinorClient;
pub use user_client::{BackendUserClient, LoginOutcome, LoginRequest};
