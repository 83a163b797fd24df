//! # ミドルウェア
//!
//! 管理ホスト用のミドルウェアを提供する。

mod cache_control;
pub mod request_id;
mod session_guard;

pub use cache_control::no_store;
pub use session_guard::{SessionGuardState, require_session};
