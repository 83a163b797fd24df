//! # 外部 API クライアント
//!
//! コンテンツバックエンドとの通信を担当する。

pub mod backend;

pub use backend::{
    BackendBlogClient,
    BackendClient,
    BackendClientImpl,
    BackendError,
    BackendMinorClient,
    BackendUserClient,
    Credentials,
    LoginOutcome,
    LoginRequest,
};
