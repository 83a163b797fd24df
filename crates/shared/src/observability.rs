//! # Observability 基盤
//!
//! 管理ホストのトレーシング初期化と Request ID 生成。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// ログ出力形式
///
/// `LOG_FORMAT=json` のときだけ JSON、それ以外は Pretty。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値からログ形式を決める
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 未設定時は `"info,quanweb=debug"`。
#[cfg(feature = "observability")]
pub fn init_tracing(log_format: LogFormat) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,quanweb=debug".into());

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// UUID v7 で Request ID を生成する `MakeRequestId` 実装
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = uuid::Uuid::now_v7().to_string().parse().ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// `TraceLayer` 用のリクエストスパンを作成する
///
/// `SetRequestIdLayer` の内側で呼ばれる前提で、`x-request-id` をスパンに含める。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_jsonのときだけjson形式になる() {
        assert_eq!(LogFormat::from_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("JSON")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(None), LogFormat::Pretty);
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_request_idはuuid_v7で生成される() {
        use tower_http::request_id::MakeRequestId;

        let request = http::Request::new(());

        let id = MakeRequestUuidV7.make_request_id(&request).unwrap();

        let uuid = uuid::Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();
        assert_eq!(uuid.get_version_num(), 7);
    }
}
