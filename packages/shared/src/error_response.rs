//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - 形式は `{ "error": "..." }` のみ。HTTP ステータスはボディに含めない

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// バリデーションエラー、リソース不在、データベースエラーのいずれも
/// この形式で返す。区別は HTTP ステータスで行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// エラーメッセージからレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
