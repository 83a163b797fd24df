//! # 管理ホスト設定
//!
//! 環境変数から管理ホストの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ADMIN_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ADMIN_PORT` | **Yes** | ポート番号 |
//! | `BACKEND_URL` | **Yes** | コンテンツバックエンドの API ベース URL |

use std::env;

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 管理ホストの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// コンテンツバックエンドの URL（例: `http://localhost:3721/_api`）
    pub backend_url: String,
}

impl AdminConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分けている。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port_raw = required("ADMIN_PORT")?;
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name:  "ADMIN_PORT",
            value: port_raw.clone(),
        })?;

        let backend_url = required("BACKEND_URL")?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name:  "BACKEND_URL",
                value: backend_url,
            });
        }

        Ok(Self {
            host: lookup("ADMIN_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            backend_url,
        })
    }

    /// バインドするアドレス文字列（`host:port`）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdminConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_必須項目から設定を読み込む() {
        let config = load(&[
            ("ADMIN_PORT", "8080"),
            ("BACKEND_URL", "http://localhost:3721/_api"),
        ])
        .unwrap();

        assert_eq!(
            config,
            AdminConfig {
                host:        "0.0.0.0".to_string(),
                port:        8080,
                backend_url: "http://localhost:3721/_api".to_string(),
            }
        );
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_admin_hostを上書きできる() {
        let config = load(&[
            ("ADMIN_HOST", "127.0.0.1"),
            ("ADMIN_PORT", "8080"),
            ("BACKEND_URL", "https://quanweb.example.com/_api"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
    }

    #[rstest]
    #[case(&[("BACKEND_URL", "http://localhost:3721/_api")], ConfigError::Missing("ADMIN_PORT"))]
    #[case(&[("ADMIN_PORT", "8080")], ConfigError::Missing("BACKEND_URL"))]
    #[case(&[("ADMIN_PORT", "8080"), ("BACKEND_URL", " ")], ConfigError::Missing("BACKEND_URL"))]
    #[case(
        &[("ADMIN_PORT", "eighty"), ("BACKEND_URL", "http://localhost:3721/_api")],
        ConfigError::Invalid { name: "ADMIN_PORT", value: "eighty".to_string() }
    )]
    #[case(
        &[("ADMIN_PORT", "8080"), ("BACKEND_URL", "localhost:3721")],
        ConfigError::Invalid { name: "BACKEND_URL", value: "localhost:3721".to_string() }
    )]
    fn test_不足や不正な値はエラーになる(
        #[case] vars: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        assert_eq!(load(vars), Err(expected));
    }
}
