//! プレゼンテーション・書籍関連のバックエンド クライアント

use async_trait::async_trait;
use quanweb_domain::minor::{Book, Presentation, PresentationId, PresentationPayload};
use quanweb_shared::{ObjectList, Paging};

use super::{
    blog_client::with_paging,
    client_impl::BackendClientImpl,
    credentials::Credentials,
    error::BackendError,
    response::handle_response,
};

/// プレゼンテーション・書籍関連のバックエンド クライアントトレイト
#[async_trait]
pub trait BackendMinorClient: Send + Sync {
    /// プレゼンテーション一覧を取得する
    ///
    /// バックエンドの `GET /presentations/` を呼び出す。
    async fn list_presentations(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Presentation>, BackendError>;

    /// プレゼンテーションを作成する
    ///
    /// バックエンドの `POST /presentations/` を呼び出す。
    async fn create_presentation(
        &self,
        credentials: &Credentials,
        payload: &PresentationPayload,
    ) -> Result<Presentation, BackendError>;

    /// プレゼンテーションを取得する
    async fn get_presentation(
        &self,
        credentials: &Credentials,
        id: PresentationId,
    ) -> Result<Presentation, BackendError>;

    /// プレゼンテーションを部分更新する
    ///
    /// バックエンドの `PATCH /presentations/{id}` を呼び出す。
    async fn update_presentation(
        &self,
        credentials: &Credentials,
        id: PresentationId,
        payload: &PresentationPayload,
    ) -> Result<Presentation, BackendError>;

    /// 書籍一覧を取得する
    ///
    /// バックエンドの `GET /books/` を呼び出す。
    async fn list_books(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Book>, BackendError>;
}

#[async_trait]
impl BackendMinorClient for BackendClientImpl {
    async fn list_presentations(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Presentation>, BackendError> {
        let path = with_paging("/presentations/", paging);
        let response = self
            .request(reqwest::Method::GET, &path, credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn create_presentation(
        &self,
        credentials: &Credentials,
        payload: &PresentationPayload,
    ) -> Result<Presentation, BackendError> {
        let response = self
            .request(reqwest::Method::POST, "/presentations/", credentials)
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn get_presentation(
        &self,
        credentials: &Credentials,
        id: PresentationId,
    ) -> Result<Presentation, BackendError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/presentations/{id}"), credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn update_presentation(
        &self,
        credentials: &Credentials,
        id: PresentationId,
        payload: &PresentationPayload,
    ) -> Result<Presentation, BackendError> {
        let response = self
            .request(
                reqwest::Method::PATCH,
                &format!("/presentations/{id}"),
                credentials,
            )
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn list_books(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Book>, BackendError> {
        let path = with_paging("/books/", paging);
        let response = self
            .request(reqwest::Method::GET, &path, credentials)
            .send()
            .await?;
        handle_response(response).await
    }
}
