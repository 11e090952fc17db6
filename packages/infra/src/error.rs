//! # インフラ層エラー定義
//!
//! データベースとの通信やスキーマスクリプトの読み込みで発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<sqlx::Error>` や convenience constructor でエラーを生成すると、
//! その時点のスパン情報（どのリポジトリメソッドで失敗したか）が記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// SQL の実行失敗、接続エラー、テーブル不在、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// スキーマスクリプトの読み込み失敗
    #[error("スキーマスクリプトを読み込めません: {path}: {source}")]
    SchemaScript {
        /// スクリプトのパス
        path:   String,
        #[source]
        source: std::io::Error,
    },

    /// 予期しないエラー
    ///
    /// DB に格納された値がドメインの制約を満たさない場合など。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// クライアントへ返すエラーメッセージ
    ///
    /// データベースエラーの場合はドライバが返したメッセージ
    /// （例: `no such table: dados`）をそのまま返す。
    pub fn driver_message(&self) -> String {
        match &self.kind {
            InfraErrorKind::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            InfraErrorKind::Database(other) => other.to_string(),
            InfraErrorKind::SchemaScript { path, source } => format!("{path}: {source}"),
            InfraErrorKind::Unexpected(msg) => msg.clone(),
        }
    }

    // ===== Convenience constructors =====

    /// スキーマスクリプト読み込みエラーを生成する
    pub fn schema_script(path: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            kind:       InfraErrorKind::SchemaScript {
                path: path.into(),
                source,
            },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}
