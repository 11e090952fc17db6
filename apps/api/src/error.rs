//! # API エラー定義
//!
//! ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーと HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | ボディ |
//! |-----------|----------------|--------|
//! | `Validation` | 400 Bad Request | `{"error": "<検証メッセージ>"}` |
//! | `NotFound` | 404 Not Found | `{"error": "Dado não encontrado"}` |
//! | `Database` | 500 Internal Server Error | `{"error": "<ドライバのメッセージ>"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cadastro_domain::DomainError;
use cadastro_infra::InfraError;
use cadastro_shared::ErrorResponse;
use thiserror::Error;

/// 対象の行が存在しない場合のメッセージ
pub const NOT_FOUND_MESSAGE: &str = "Dado não encontrado";

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力値の検証失敗
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 対象の行が存在しない
    #[error("リソースが見つかりません")]
    NotFound,

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            ApiError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, e.driver_message())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
