//! # quanweb 管理ホスト
//!
//! 管理画面（ブラウザ）とコンテンツバックエンドの間に立つサーバー。
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│  Admin Host  │────▶│ Content Backend  │
//! │   (admin)    │     │              │     │   (/_api)        │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! - ナビゲーションごとに `GET /users/me` でセッションを再検証する
//! - 記事・カテゴリ・プレゼンテーション・書籍の CRUD を中継する
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ADMIN_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ADMIN_PORT` | **Yes** | ポート番号 |
//! | `BACKEND_URL` | **Yes** | コンテンツバックエンドの URL（例: `http://localhost:3721/_api`） |
//! | `LOG_FORMAT` | No | `json` で JSON ログ（デフォルト: pretty） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,quanweb=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! ADMIN_PORT=8000 BACKEND_URL=http://localhost:3721/_api cargo run -p quanweb-admin
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use quanweb_admin::{app::build_app, client::BackendClientImpl, config::AdminConfig};
use quanweb_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env を使わず環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());
    let _tracing_guard = tracing::info_span!("app", service = "admin").entered();

    let config = AdminConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        backend_url = %config.backend_url,
        "管理ホストを起動します: {}",
        config.bind_addr()
    );

    let backend_client = Arc::new(BackendClientImpl::new(&config.backend_url));
    let app = build_app(backend_client);

    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}", config.bind_addr()))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("管理ホストが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
