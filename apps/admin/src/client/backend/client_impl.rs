//! BackendClient スーパートレイトとクライアント実装の構造体

use super::{
    blog_client::BackendBlogClient,
    credentials::Credentials,
    minor_client::BackendMinorClient,
    user_client::BackendUserClient,
};
use crate::middleware::request_id::inject_request_id;

/// コンテンツバックエンド クライアントトレイト（スーパートレイト）
///
/// User / Blog / Minor の各サブトレイトを束ねる。
/// テスト時にはサブトレイト単位でスタブを使用できる。
pub trait BackendClient: BackendUserClient + BackendBlogClient + BackendMinorClient {}

impl<T> BackendClient for T where T: BackendUserClient + BackendBlogClient + BackendMinorClient {}

/// コンテンツバックエンド クライアント実装
#[derive(Clone)]
pub struct BackendClientImpl {
    pub(super) base_url: String,
    pub(super) client:   reqwest::Client,
}

impl BackendClientImpl {
    /// 新しい BackendClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（例: `http://localhost:3721/_api`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 認証情報と Request ID を付与したリクエストビルダーを作成する
    pub(super) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        let is_write = !method.is_safe();
        let builder = self.client.request(method, self.url(path));
        inject_request_id(credentials.apply(builder, is_write))
    }
}
