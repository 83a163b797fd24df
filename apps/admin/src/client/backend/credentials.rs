//! ブラウザから転送する認証情報

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::CookieJar;

/// バックエンドが発行する CSRF トークンの Cookie 名
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// 状態変更リクエストで CSRF トークンを送るヘッダー名
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// バックエンドへ転送する認証情報
///
/// ブラウザのリクエストの `Cookie` ヘッダーと、そこから取り出した CSRF トークンを持つ。
/// 値はログに出さない。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    cookie:     Option<String>,
    csrf_token: Option<String>,
}

impl Credentials {
    /// 認証情報なし
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// リクエストヘッダーから認証情報を取り出す
    ///
    /// 複数の `Cookie` ヘッダーは `; ` で連結する。
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookies: Vec<&str> = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        if cookies.is_empty() {
            return Self::anonymous();
        }

        let csrf_token = CookieJar::from_headers(headers)
            .get(CSRF_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());

        Self {
            cookie: Some(cookies.join("; ")),
            csrf_token,
        }
    }

    /// Cookie を持っているか
    pub fn has_cookie(&self) -> bool {
        self.cookie.is_some()
    }

    /// リクエストビルダーに認証情報を付与する
    ///
    /// CSRF トークンは状態変更リクエスト（`is_write`）にのみ付与する。
    pub(super) fn apply(
        &self,
        mut builder: reqwest::RequestBuilder,
        is_write: bool,
    ) -> reqwest::RequestBuilder {
        if let Some(cookie) = &self.cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        if is_write && let Some(token) = &self.csrf_token {
            builder = builder.header(CSRF_HEADER_NAME, token);
        }
        builder
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("cookie", &self.cookie.as_ref().map(|_| "[REDACTED]"))
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn build(credentials: &Credentials, is_write: bool) -> reqwest::Request {
        let client = reqwest::Client::new();
        credentials
            .apply(client.post("http://example.com/_api/posts/"), is_write)
            .build()
            .unwrap()
    }

    #[test]
    fn test_cookieなしは匿名になる() {
        let credentials = Credentials::from_headers(&HeaderMap::new());

        assert_eq!(credentials, Credentials::anonymous());
        assert!(!credentials.has_cookie());
    }

    #[test]
    fn test_書き込みリクエストにcsrfトークンを付与する() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("sessionid=abc; csrftoken=tok123"),
        );
        let credentials = Credentials::from_headers(&headers);

        let request = build(&credentials, true);

        assert_eq!(
            request.headers().get(reqwest::header::COOKIE).unwrap(),
            "sessionid=abc; csrftoken=tok123"
        );
        assert_eq!(request.headers().get(CSRF_HEADER_NAME).unwrap(), "tok123");
    }

    #[test]
    fn test_読み取りリクエストにはcsrfトークンを付与しない() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("sessionid=abc; csrftoken=tok123"),
        );
        let credentials = Credentials::from_headers(&headers);

        let request = build(&credentials, false);

        assert!(request.headers().get(CSRF_HEADER_NAME).is_none());
    }

    #[test]
    fn test_複数のcookieヘッダーを連結する() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("sessionid=abc"));
        headers.append(header::COOKIE, HeaderValue::from_static("csrftoken=tok"));

        let credentials = Credentials::from_headers(&headers);
        let request = build(&credentials, true);

        assert_eq!(
            request.headers().get(reqwest::header::COOKIE).unwrap(),
            "sessionid=abc; csrftoken=tok"
        );
        assert_eq!(request.headers().get(CSRF_HEADER_NAME).unwrap(), "tok");
    }

    #[test]
    fn test_debug出力に値を含めない() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("sessionid=secret"));

        let output = format!("{:?}", Credentials::from_headers(&headers));

        assert!(!output.contains("secret"));
    }
}
