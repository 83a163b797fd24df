//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、データの検証と保存はコンテンツバックエンドに委譲する
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `auth`: ログイン画面、ログイン、ログアウト、現在のユーザー
//! - `blog`: 記事・カテゴリ
//! - `minor`: プレゼンテーション・書籍

pub mod auth;
pub mod blog;
pub mod health;
pub mod minor;

pub use auth::{AuthState, home, login, login_page, logout};
pub use blog::{
    BlogState,
    create_category,
    create_post,
    delete_category,
    delete_post,
    get_category,
    get_post,
    list_categories,
    list_posts,
    update_category,
    update_post,
};
pub use health::health_check;
pub use minor::{
    MinorState,
    create_presentation,
    get_presentation,
    list_books,
    list_presentations,
    update_presentation,
};
