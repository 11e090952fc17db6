//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。すべての変数にデフォルト値があり、
//! 未設定でも開発環境で起動できる。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `APP_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `APP_PORT` | No | `5000` | ポート番号 |
//! | `DATABASE_URL` | No | `sqlite://database.db` | SQLite 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | `5` | 接続プールの最大接続数 |
//! | `SCHEMA_PATH` | No | `schema.sql` | `/initdb` で実行するスキーマスクリプト |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//!
//! ログのフィルタ（`RUST_LOG`）は tracing-subscriber の `EnvFilter` が直接読む。

use std::{env, num::ParseIntError, path::PathBuf};

use cadastro_shared::observability::LogFormat;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SCHEMA_PATH: &str = "schema.sql";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 数値として解釈できない値
    #[error("{name} は数値である必要があります: {value:?}")]
    InvalidNumber {
        name:   &'static str,
        value:  String,
        #[source]
        source: ParseIntError,
    },

    /// 未知のログ出力形式
    #[error("LOG_FORMAT は json または pretty である必要があります: {0:?}")]
    InvalidLogFormat(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// データベース接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 接続 URL（例: `sqlite://database.db`）
    pub url:             String,
    /// 接続プールの最大接続数
    pub max_connections: u32,
}

/// アプリケーション全体の設定
///
/// アプリケーション起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP サーバー設定
    pub server:      ServerConfig,
    /// データベース接続設定
    pub database:    DatabaseConfig,
    /// スキーマスクリプトのパス
    pub schema_path: PathBuf,
    /// ログ出力形式
    pub log_format:  LogFormat,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の変数ルックアップ関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう、
    /// 読み込み元を関数として受け取る。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server:      ServerConfig {
                host: var_or("APP_HOST", DEFAULT_HOST),
                port: parse_number("APP_PORT", lookup("APP_PORT"), DEFAULT_PORT)?,
            },
            database:    DatabaseConfig {
                url:             var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
                max_connections: parse_number(
                    "DATABASE_MAX_CONNECTIONS",
                    lookup("DATABASE_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            },
            schema_path: PathBuf::from(var_or("SCHEMA_PATH", DEFAULT_SCHEMA_PATH)),
            log_format:  match lookup("LOG_FORMAT") {
                None => LogFormat::default(),
                Some(value) => {
                    LogFormat::from_name(&value).ok_or(ConfigError::InvalidLogFormat(value))?
                }
            },
        })
    }
}

/// 数値の環境変数を解釈する（未設定ならデフォルト値）
fn parse_number<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidNumber {
                name,
                value,
                source,
            }),
    }
}
