//! # ドメイン層エラー定義
//!
//! 入力値が値オブジェクトの制約に違反した場合のエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! リソースの不在はドメインエラーではなく、リポジトリが `None` を返すことで表現する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドの空文字、文字数制限の超過、範囲外の数値など。
    #[error("{0}")]
    Validation(String),
}
