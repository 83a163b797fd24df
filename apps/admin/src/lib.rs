//! # quanweb 管理ホスト ライブラリ
//!
//! ブラウザとコンテンツバックエンド（`/_api`）の間に立つ管理画面用サーバーの
//! コアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: ルーター構築
//! - `client`: コンテンツバックエンドのクライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーレスポンス変換
//! - `guard`: セッションガード（ナビゲーションごとの再検証）
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（セッションガード、Request ID 等）
//! - `routes`: ルートテーブル（パス → ルート名）
//! - `session`: セッションコンテキスト（ログイン中ユーザーの保持）

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod handler;
pub mod middleware;
pub mod routes;
pub mod session;
