//! ブログ記事・カテゴリ関連のバックエンド クライアント

use async_trait::async_trait;
use quanweb_domain::blog::{Category, CategoryId, CategoryPayload, Post, PostId, PostPayload};
use quanweb_shared::{ObjectList, Paging};

use super::{
    client_impl::BackendClientImpl,
    credentials::Credentials,
    error::BackendError,
    response::{handle_empty_response, handle_response},
};

/// ブログ関連のバックエンド クライアントトレイト
#[async_trait]
pub trait BackendBlogClient: Send + Sync {
    /// 記事一覧を取得する
    ///
    /// バックエンドの `GET /posts/` を呼び出す。
    async fn list_posts(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Post>, BackendError>;

    /// 記事を取得する
    ///
    /// バックエンドの `GET /posts/{id}` を呼び出す。
    async fn get_post(&self, credentials: &Credentials, id: PostId) -> Result<Post, BackendError>;

    /// 記事を作成する
    ///
    /// バックエンドの `POST /posts/` を呼び出す。
    async fn create_post(
        &self,
        credentials: &Credentials,
        payload: &PostPayload,
    ) -> Result<Post, BackendError>;

    /// 記事を更新する
    ///
    /// バックエンドの `PATCH /posts/{id}` を呼び出す。
    async fn update_post(
        &self,
        credentials: &Credentials,
        id: PostId,
        payload: &PostPayload,
    ) -> Result<Post, BackendError>;

    /// 記事を削除する
    ///
    /// バックエンドの `DELETE /posts/{id}` を呼び出す。
    async fn delete_post(&self, credentials: &Credentials, id: PostId) -> Result<(), BackendError>;

    /// カテゴリ一覧を取得する
    async fn list_categories(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Category>, BackendError>;

    /// カテゴリを取得する
    async fn get_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
    ) -> Result<Category, BackendError>;

    /// カテゴリを作成する
    async fn create_category(
        &self,
        credentials: &Credentials,
        payload: &CategoryPayload,
    ) -> Result<Category, BackendError>;

    /// カテゴリを更新する
    async fn update_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
        payload: &CategoryPayload,
    ) -> Result<Category, BackendError>;

    /// カテゴリを削除する
    async fn delete_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
    ) -> Result<(), BackendError>;
}

/// 一覧パスにページ指定のクエリを付ける
pub(super) fn with_paging(path: &str, paging: Paging) -> String {
    let query = paging.to_query();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[async_trait]
impl BackendBlogClient for BackendClientImpl {
    async fn list_posts(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Post>, BackendError> {
        let path = with_paging("/posts/", paging);
        let response = self
            .request(reqwest::Method::GET, &path, credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn get_post(&self, credentials: &Credentials, id: PostId) -> Result<Post, BackendError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/posts/{id}"), credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn create_post(
        &self,
        credentials: &Credentials,
        payload: &PostPayload,
    ) -> Result<Post, BackendError> {
        let response = self
            .request(reqwest::Method::POST, "/posts/", credentials)
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn update_post(
        &self,
        credentials: &Credentials,
        id: PostId,
        payload: &PostPayload,
    ) -> Result<Post, BackendError> {
        let response = self
            .request(reqwest::Method::PATCH, &format!("/posts/{id}"), credentials)
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn delete_post(&self, credentials: &Credentials, id: PostId) -> Result<(), BackendError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/posts/{id}"), credentials)
            .send()
            .await?;
        handle_empty_response(response).await
    }

    async fn list_categories(
        &self,
        credentials: &Credentials,
        paging: Paging,
    ) -> Result<ObjectList<Category>, BackendError> {
        let path = with_paging("/categories/", paging);
        let response = self
            .request(reqwest::Method::GET, &path, credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn get_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
    ) -> Result<Category, BackendError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/categories/{id}"), credentials)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn create_category(
        &self,
        credentials: &Credentials,
        payload: &CategoryPayload,
    ) -> Result<Category, BackendError> {
        let response = self
            .request(reqwest::Method::POST, "/categories/", credentials)
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn update_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
        payload: &CategoryPayload,
    ) -> Result<Category, BackendError> {
        let response = self
            .request(reqwest::Method::PATCH, &format!("/categories/{id}"), credentials)
            .json(payload)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn delete_category(
        &self,
        credentials: &Credentials,
        id: CategoryId,
    ) -> Result<(), BackendError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/categories/{id}"), credentials)
            .send()
            .await?;
        handle_empty_response(response).await
    }
}
