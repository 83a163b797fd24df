//! # ルートテーブル
//!
//! リクエストパスを管理画面のルート名に解決する。
//! セッションガードはルート名で適用可否を判断する。
//!
//! | パターン | ルート名 |
//! |---|---|
//! | `/` | `home` |
//! | `/login` | `login` |
//! | `/logout` | `logout` |
//! | `/health` | `health` |
//! | `/posts` | `posts` |
//! | `/posts/{id}` | `post-edit` |
//! | `/categories` | `categories` |
//! | `/categories/{id}` | `category-edit` |
//! | `/presentations` | `presentations` |
//! | `/presentations/{id}` | `presentation-edit` |
//! | `/books` | `books` |
//! | 上記以外 | `not-found` |

use strum::{EnumString, IntoStaticStr};

/// ログイン画面のパス
pub const LOGIN_PATH: &str = "/login";

/// ルート名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RouteName {
    Home,
    Login,
    Logout,
    Health,
    Posts,
    PostEdit,
    Categories,
    CategoryEdit,
    Presentations,
    PresentationEdit,
    Books,
    NotFound,
}

/// 管理画面のルート定義
const ADMIN_ROUTES: [(&str, RouteName); 11] = [
    ("/", RouteName::Home),
    ("/login", RouteName::Login),
    ("/logout", RouteName::Logout),
    ("/health", RouteName::Health),
    ("/posts", RouteName::Posts),
    ("/posts/{id}", RouteName::PostEdit),
    ("/categories", RouteName::Categories),
    ("/categories/{id}", RouteName::CategoryEdit),
    ("/presentations", RouteName::Presentations),
    ("/presentations/{id}", RouteName::PresentationEdit),
    ("/books", RouteName::Books),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    /// `{name}`: 空でない任意の 1 セグメント
    Param,
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// パスパターンとルート名の静的なテーブル
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(Vec<Segment>, RouteName)>,
}

impl RouteTable {
    /// パターンの一覧からテーブルを作成する
    pub fn new(entries: &[(&'static str, RouteName)]) -> Self {
        let routes = entries
            .iter()
            .map(|(pattern, name)| {
                let segments = split_path(pattern)
                    .map(|s| {
                        if s.starts_with('{') && s.ends_with('}') {
                            Segment::Param
                        } else {
                            Segment::Static(s)
                        }
                    })
                    .collect();
                (segments, *name)
            })
            .collect();
        Self { routes }
    }

    /// 管理画面のルートテーブル
    pub fn admin() -> Self {
        Self::new(&ADMIN_ROUTES)
    }

    /// パス（クエリを含まない）をルート名に解決する
    ///
    /// 末尾のスラッシュは無視する。一致しない場合は `not-found`。
    pub fn resolve(&self, path: &str) -> RouteName {
        let segments: Vec<&str> = split_path(path).collect();

        self.routes
            .iter()
            .find(|(pattern, _)| {
                pattern.len() == segments.len()
                    && pattern.iter().zip(&segments).all(|(p, s)| match p {
                        Segment::Static(expected) => expected == s,
                        Segment::Param => true,
                    })
            })
            .map(|(_, name)| *name)
            .unwrap_or(RouteName::NotFound)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::admin()
    }
}
