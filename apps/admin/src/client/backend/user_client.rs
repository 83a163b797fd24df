//! ユーザー関連のバックエンド クライアント

use async_trait::async_trait;
use axum::http::HeaderValue;
use quanweb_domain::identity::Identity;
use serde::{Deserialize, Serialize};

use super::{
    client_impl::BackendClientImpl,
    credentials::Credentials,
    error::BackendError,
    response::{handle_empty_response, handle_response},
};

/// ログインリクエスト
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email:    String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// ログイン結果
///
/// バックエンドが発行したセッション Cookie（`Set-Cookie`）はブラウザへ中継する。
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub identity:    Identity,
    pub set_cookies: Vec<HeaderValue>,
}

/// ユーザー関連のバックエンド クライアントトレイト
#[async_trait]
pub trait BackendUserClient: Send + Sync {
    /// 現在のユーザーを取得する
    ///
    /// バックエンドの `GET /users/me` を呼び出す。
    /// ボディが識別情報の形でない場合は `BackendError::Schema` を返す。
    async fn get_me(&self, credentials: &Credentials) -> Result<Identity, BackendError>;

    /// ログインする
    ///
    /// バックエンドの `POST /login` を呼び出す。
    async fn login(
        &self,
        credentials: &Credentials,
        req: &LoginRequest,
    ) -> Result<LoginOutcome, BackendError>;

    /// ログアウトする
    ///
    /// バックエンドの `POST /logout` を呼び出し、Cookie を消す `Set-Cookie` を返す。
    async fn logout(&self, credentials: &Credentials) -> Result<Vec<HeaderValue>, BackendError>;
}

/// レスポンスから `Set-Cookie` ヘッダーを取り出す
fn collect_set_cookies(response: &reqwest::Response) -> Vec<HeaderValue> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .cloned()
        .collect()
}

#[async_trait]
impl BackendUserClient for BackendClientImpl {
    async fn get_me(&self, credentials: &Credentials) -> Result<Identity, BackendError> {
        let response = self
            .request(reqwest::Method::GET, "/users/me", credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn login(
        &self,
        credentials: &Credentials,
        req: &LoginRequest,
    ) -> Result<LoginOutcome, BackendError> {
        let response = self
            .request(reqwest::Method::POST, "/login", credentials)
            .json(req)
            .send()
            .await?;

        let set_cookies = collect_set_cookies(&response);
        let identity = handle_response(response).await?;

        Ok(LoginOutcome {
            identity,
            set_cookies,
        })
    }

    async fn logout(&self, credentials: &Credentials) -> Result<Vec<HeaderValue>, BackendError> {
        let response = self
            .request(reqwest::Method::POST, "/logout", credentials)
            .send()
            .await?;

        let set_cookies = collect_set_cookies(&response);
        handle_empty_response(response).await?;

        Ok(set_cookies)
    }
}
