//! # セッションコンテキスト
//!
//! ログイン中ユーザーの識別情報を保持する。
//!
//! 保持している値はキャッシュであり、信頼の根拠にはならない。
//! 保護されたナビゲーションでは必ずセッションガードがバックエンドに再検証し、
//! その結果でこのコンテキストを更新する。
//!
//! ## ライフサイクル
//!
//! ```text
//! 起動直後: なし
//!   ├─ 再検証成功 / ログイン成功 → 保持
//!   └─ 再検証失敗 / ログアウト   → クリア
//! ```
//!
//! グローバル変数ではなく、`Arc<SessionContext>` としてガードとハンドラに注入する。

use std::sync::{PoisonError, RwLock};

use quanweb_domain::identity::Identity;

/// ログイン中ユーザーの識別情報を保持するコンテキスト
///
/// 更新するのはセッションガード、ログイン、ログアウトのみ。
#[derive(Debug, Default)]
pub struct SessionContext {
    identity: RwLock<Option<Identity>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持している識別情報を返す
    pub fn current(&self) -> Option<Identity> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 識別情報を保存する（既存の値は置き換える）
    pub fn store(&self, identity: Identity) {
        *self.identity.write().unwrap_or_else(PoisonError::into_inner) = Some(identity);
    }

    /// 識別情報をクリアし、保持していた値を返す
    pub fn clear(&self) -> Option<Identity> {
        self.identity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quanweb_domain::identity::{Email, UserId};
    use uuid::Uuid;

    use super::*;

    fn identity(email: &str) -> Identity {
        Identity::new(
            UserId::from_uuid(Uuid::from_u128(1)),
            Email::new(email).unwrap(),
        )
    }

    #[test]
    fn test_起動直後は未認証() {
        let sut = SessionContext::new();

        assert_eq!(sut.current(), None);
    }

    #[test]
    fn test_保存した識別情報を返す() {
        let sut = SessionContext::new();

        sut.store(identity("admin@example.com"));

        assert_eq!(sut.current(), Some(identity("admin@example.com")));
    }

    #[test]
    fn test_保存は既存の識別情報を置き換える() {
        let sut = SessionContext::new();
        sut.store(identity("old@example.com"));

        sut.store(identity("new@example.com"));

        assert_eq!(sut.current(), Some(identity("new@example.com")));
    }

    #[test]
    fn test_クリアで保持していた値を返し未認証になる() {
        let sut = SessionContext::new();
        sut.store(identity("admin@example.com"));

        let cleared = sut.clear();

        assert_eq!(cleared, Some(identity("admin@example.com")));
        assert_eq!(sut.current(), None);
        assert_eq!(sut.clear(), None);
    }
}
