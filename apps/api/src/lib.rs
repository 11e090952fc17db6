//! # Cadastro API サーバー
//!
//! 人物（`dados`）と都市（`cidades`）の CRUD を JSON で提供する HTTP サーバーのライブラリ部分。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   Client    │────▶│ cadastro-api│────▶│ SQLite file  │
//! │   (JSON)    │     │ (port 5000) │     │ (database.db)│
//! └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の組み立てとルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 依存関係
//!
//! - `cadastro_domain`: エンティティと値オブジェクト
//! - `cadastro_infra`: SQLite 接続とリポジトリ
//! - `cadastro_shared`: レスポンス型とトレーシング初期化
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use cadastro_api::{app_builder::build_app, config::AppConfig};
//!
//! let config = AppConfig::from_env()?;
//! let pool = cadastro_infra::db::create_pool(&config.database.url, 5).await?;
//! let app = build_app(pool, config.schema_path);
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
