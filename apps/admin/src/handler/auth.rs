//! # 認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /login?attempt=...` - ログイン画面
//! - `POST /login` - ログイン（成功時は `attempt` へ 303）
//! - `POST /logout` - ログアウト（`/login` へ 303）
//! - `GET /` - 現在のユーザー
//!
//! セッションの実体はコンテンツバックエンドが持つ。管理ホストはバックエンドが
//! 発行した `Set-Cookie` をブラウザへ中継し、識別情報をセッションコンテキストに
//! 保持するだけである。

mod login;
mod session;

use std::sync::Arc;

pub use login::{login, login_page};
use serde::{Deserialize, Serialize};
pub use session::{home, logout};

use crate::{client::BackendUserClient, session::SessionContext};

/// ログイン後の既定の遷移先
const DEFAULT_LANDING_PATH: &str = "/";

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub backend_client: Arc<dyn BackendUserClient>,
    pub session:        Arc<SessionContext>,
}

// --- リクエスト/レスポンス型 ---

/// ログイン画面のクエリ
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub attempt: Option<String>,
}

/// ログイン画面のビューモデル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPageData {
    /// ログイン後に戻る先（安全なパスのみ）
    pub attempt: Option<String>,
}

/// ログインフォーム
#[derive(Deserialize)]
pub struct LoginForm {
    pub email:    String,
    pub password: String,
    #[serde(default)]
    pub attempt:  Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("attempt", &self.attempt)
            .finish()
    }
}

/// `attempt` が管理ホスト内のパスであれば返す
///
/// `/` で始まり、`//` で始まらず、バックスラッシュや制御文字を含まないものだけを
/// 受け付ける。外部サイトへのオープンリダイレクトを防ぐ。
pub fn sanitize_attempt(attempt: Option<&str>) -> Option<&str> {
    attempt.filter(|a| {
        a.starts_with('/')
            && !a.starts_with("//")
            && !a.contains('\\')
            && !a.chars().any(char::is_control)
    })
}

/// ログイン成功後の遷移先
pub fn attempt_target(attempt: Option<&str>) -> &str {
    sanitize_attempt(attempt).unwrap_or(DEFAULT_LANDING_PATH)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("/posts"), "/posts")]
    #[case(Some("/posts?page=2"), "/posts?page=2")]
    #[case(Some("/categories/0190f3a5-8c6e-7d2a-9b1f-3c4d5e6f7a8b"), "/categories/0190f3a5-8c6e-7d2a-9b1f-3c4d5e6f7a8b")]
    #[case(None, "/")]
    #[case(Some(""), "/")]
    #[case(Some("//evil.example.com"), "/")]
    #[case(Some("https://evil.example.com/posts"), "/")]
    #[case(Some("/\\evil.example.com"), "/")]
    #[case(Some("posts"), "/")]
    #[case(Some("/posts\r\nSet-Cookie: x=1"), "/")]
    fn test_安全なattemptのみ遷移先にする(#[case] attempt: Option<&str>, #[case] expected: &str) {
        assert_eq!(attempt_target(attempt), expected);
    }

    #[test]
    fn test_ログインフォームのdebug出力にパスワードを含めない() {
        let form = LoginForm {
            email:    "admin@example.com".to_string(),
            password: "hunter2".to_string(),
            attempt:  None,
        };

        assert!(!format!("{form:?}").contains("hunter2"));
    }
}
