//! # セッションガード
//!
//! 管理画面へのナビゲーションごとに、ログインセッションが有効かを
//! バックエンドの「現在のユーザー」エンドポイントで再検証する。
//!
//! ## 判定フロー
//!
//! ```text
//! Start ─┬─ 許可リストのルート ───────────────→ Proceed（通信なし）
//!        └─ GET /users/me ─┬─ 識別情報を受信 → Proceed（コンテキストに保存）
//!                          └─ 失敗           → RedirectToLogin（コンテキストをクリア）
//! ```
//!
//! - セッションコンテキストに識別情報があっても必ず再検証する。
//!   バックエンドのセッションはクライアントと無関係に失効しうる
//! - 失敗（通信エラー、2xx 以外、形の違うボディ）はすべて「未認証」に集約し、
//!   ナビゲーション層にエラーとして伝播させない
//! - 1 回のナビゲーションにつき通信は 1 回だけ。リトライはしない

use std::{collections::HashSet, sync::Arc};

use quanweb_domain::identity::Identity;
use serde::Serialize;

use crate::{
    client::{BackendUserClient, Credentials},
    routes::{LOGIN_PATH, RouteName, RouteTable},
    session::SessionContext,
};

/// ログイン後に戻る先を渡すクエリパラメータ名
pub const ATTEMPT_PARAM: &str = "attempt";

/// ナビゲーション先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    route_name: RouteName,
    full_path:  String,
}

impl NavigationIntent {
    pub fn new(route_name: RouteName, full_path: impl Into<String>) -> Self {
        Self {
            route_name,
            full_path: full_path.into(),
        }
    }

    /// パスとクエリからナビゲーション先を作成する
    ///
    /// ルート名はパス部分から解決し、`full_path` にはクエリも含める。
    pub fn resolve(routes: &RouteTable, path: &str, query: Option<&str>) -> Self {
        let full_path = match query {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.to_string(),
        };
        Self::new(routes.resolve(path), full_path)
    }

    pub fn route_name(&self) -> RouteName {
        self.route_name
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }
}

/// ログイン画面へのリダイレクト指示
///
/// JSON では `{ "name": "login", "query": { "attempt": "/posts" } }` の形になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRedirect {
    name:  &'static str,
    query: AttemptQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct AttemptQuery {
    attempt: String,
}

impl LoginRedirect {
    /// 元のナビゲーション先を `attempt` として保持する
    pub fn new(attempt: impl Into<String>) -> Self {
        Self {
            name:  RouteName::Login.into(),
            query: AttemptQuery {
                attempt: attempt.into(),
            },
        }
    }

    pub fn attempt(&self) -> &str {
        &self.query.attempt
    }

    /// リダイレクト先の URL（`/login?attempt=...`）
    pub fn location(&self) -> String {
        format!(
            "{LOGIN_PATH}?{ATTEMPT_PARAM}={}",
            urlencoding::encode(&self.query.attempt)
        )
    }
}

/// セッションガードの判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 許可リストのルート（再検証していない）
    Bypass,
    /// 再検証に成功した
    Authenticated(Identity),
    /// 未認証としてログイン画面へ
    RedirectToLogin(LoginRedirect),
}

impl GuardDecision {
    /// ナビゲーションを続行してよいか
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Bypass | Self::Authenticated(_))
    }
}

/// ガードを通さないルート名の集合
#[derive(Debug, Clone)]
pub struct AllowList(HashSet<RouteName>);

impl AllowList {
    pub fn new(routes: impl IntoIterator<Item = RouteName>) -> Self {
        Self(routes.into_iter().collect())
    }

    pub fn contains(&self, route: RouteName) -> bool {
        self.0.contains(&route)
    }
}

impl Default for AllowList {
    /// ログイン画面・404 画面・ログアウト・ヘルスチェック
    fn default() -> Self {
        Self::new([
            RouteName::Login,
            RouteName::NotFound,
            RouteName::Logout,
            RouteName::Health,
        ])
    }
}

/// セッションガード
pub struct SessionGuard {
    client:     Arc<dyn BackendUserClient>,
    allow_list: AllowList,
}

impl SessionGuard {
    pub fn new(client: Arc<dyn BackendUserClient>, allow_list: AllowList) -> Self {
        Self { client, allow_list }
    }

    /// ナビゲーションの可否を判定する
    ///
    /// 許可リスト外のルートでは `credentials` を使ってバックエンドに再検証し、
    /// 結果に応じて `session` を更新する。
    #[tracing::instrument(skip_all, fields(route = %intent.route_name()))]
    pub async fn check(
        &self,
        intent: &NavigationIntent,
        credentials: &Credentials,
        session: &SessionContext,
    ) -> GuardDecision {
        if self.allow_list.contains(intent.route_name()) {
            return GuardDecision::Bypass;
        }

        match self.client.get_me(credentials).await {
            Ok(identity) => {
                session.store(identity.clone());
                GuardDecision::Authenticated(identity)
            }
            Err(e) => {
                let was_authenticated = session.clear().is_some();
                tracing::info!(
                    error.kind = "session_revalidation",
                    was_authenticated,
                    "セッションの再検証に失敗したためログイン画面へ誘導します: {}",
                    e
                );
                GuardDecision::RedirectToLogin(LoginRedirect::new(intent.full_path()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;
    use quanweb_domain::identity::{Email, UserId};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::client::{BackendError, LoginOutcome, LoginRequest};

    /// 呼び出し回数を数えるスタブ
    struct StubUserClient {
        result: Result<Identity, BackendError>,
        calls:  AtomicUsize,
    }

    impl StubUserClient {
        fn returning(result: Result<Identity, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BackendUserClient for StubUserClient {
        async fn get_me(&self, _credentials: &Credentials) -> Result<Identity, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn login(
            &self,
            _credentials: &Credentials,
            _req: &LoginRequest,
        ) -> Result<LoginOutcome, BackendError> {
            unimplemented!("login is not used in guard tests")
        }

        async fn logout(
            &self,
            _credentials: &Credentials,
        ) -> Result<Vec<HeaderValue>, BackendError> {
            unimplemented!("logout is not used in guard tests")
        }
    }

    fn identity(email: &str) -> Identity {
        Identity::new(
            UserId::from_uuid(Uuid::from_u128(7)),
            Email::new(email).unwrap(),
        )
    }

    fn guard(client: Arc<StubUserClient>) -> SessionGuard {
        SessionGuard::new(client, AllowList::default())
    }

    #[rstest]
    #[case(RouteName::Login, "/login?attempt=%2Fposts")]
    #[case(RouteName::NotFound, "/nowhere")]
    #[tokio::test]
    async fn test_許可リストのルートは通信せずに通過する(
        #[case] route: RouteName,
        #[case] path: &str,
    ) {
        let client = StubUserClient::returning(Err(BackendError::Unauthorized));
        let sut = guard(client.clone());
        let session = SessionContext::new();

        let decision = sut
            .check(
                &NavigationIntent::new(route, path),
                &Credentials::anonymous(),
                &session,
            )
            .await;

        assert_eq!(decision, GuardDecision::Bypass);
        assert!(decision.is_proceed());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_再検証に成功すると識別情報を保存して通過する() {
        let client = StubUserClient::returning(Ok(identity("admin@example.com")));
        let sut = guard(client.clone());
        let session = SessionContext::new();

        let decision = sut
            .check(
                &NavigationIntent::new(RouteName::Posts, "/posts"),
                &Credentials::anonymous(),
                &session,
            )
            .await;

        assert_eq!(
            decision,
            GuardDecision::Authenticated(identity("admin@example.com"))
        );
        assert_eq!(session.current(), Some(identity("admin@example.com")));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_401ではattempt付きでログイン画面へリダイレクトする() {
        let client = StubUserClient::returning(Err(BackendError::Unauthorized));
        let sut = guard(client);
        let session = SessionContext::new();

        let decision = sut
            .check(
                &NavigationIntent::new(RouteName::Posts, "/posts"),
                &Credentials::anonymous(),
                &session,
            )
            .await;

        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin(LoginRedirect::new("/posts"))
        );
        assert_eq!(session.current(), None);
    }

    #[rstest]
    #[case(BackendError::Unauthorized)]
    #[case(BackendError::Schema("missing field `email`".to_string()))]
    #[case(BackendError::Network("connection refused".to_string()))]
    #[case(BackendError::Unexpected("予期しないステータス 500".to_string()))]
    #[tokio::test]
    async fn test_以前の識別情報があっても再検証失敗でクリアしてリダイレクトする(
        #[case] error: BackendError,
    ) {
        let client = StubUserClient::returning(Err(error));
        let sut = guard(client.clone());
        let session = SessionContext::new();
        session.store(identity("stale@example.com"));

        let decision = sut
            .check(
                &NavigationIntent::new(RouteName::Categories, "/categories?page=2"),
                &Credentials::anonymous(),
                &session,
            )
            .await;

        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin(LoginRedirect::new("/categories?page=2"))
        );
        assert!(!decision.is_proceed());
        assert_eq!(session.current(), None);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_識別情報を保持していても毎回再検証する() {
        let client = StubUserClient::returning(Ok(identity("fresh@example.com")));
        let sut = guard(client.clone());
        let session = SessionContext::new();
        session.store(identity("cached@example.com"));

        sut.check(
            &NavigationIntent::new(RouteName::Home, "/"),
            &Credentials::anonymous(),
            &session,
        )
        .await;

        assert_eq!(client.calls(), 1);
        assert_eq!(session.current(), Some(identity("fresh@example.com")));
    }

    #[test]
    fn test_ナビゲーション先はクエリを含むフルパスを持つ() {
        let intent = NavigationIntent::resolve(&RouteTable::admin(), "/posts", Some("page=3"));

        assert_eq!(intent.route_name(), RouteName::Posts);
        assert_eq!(intent.full_path(), "/posts?page=3");
    }

    #[test]
    fn test_リダイレクト指示のjson形状() {
        let redirect = LoginRedirect::new("/posts");

        let json = serde_json::to_value(&redirect).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "login", "query": { "attempt": "/posts" } })
        );
    }

    #[test]
    fn test_リダイレクト先urlはattemptをエンコードする() {
        let redirect = LoginRedirect::new("/posts?page=2&per_page=10");

        assert_eq!(
            redirect.location(),
            "/login?attempt=%2Fposts%3Fpage%3D2%26per_page%3D10"
        );
    }
}
