//! # ドメイン層エラー定義
//!
//! 入力値やバックエンドから受け取った値がモデルの制約に違反した場合のエラー。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、400 Validation Error に変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// # 例
    ///
    /// - メールアドレスの形式が不正
    /// - 記事にカテゴリが 1 つも指定されていない
    /// - 日時文字列が解釈できない
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
