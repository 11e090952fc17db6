//! # Cadastro インフラ層
//!
//! SQLite データベースとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite ファイルへの接続プール管理
//! - **スキーマ初期化**: 外部スクリプトによるテーブルの再作成
//! - **リポジトリ実装**: 人物・都市テーブルへのパラメータ化 SQL
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール、スキーマ初期化、疎通確認
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと SQLite 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use cadastro_infra::{db, repository::{PersonRepository, SqlitePersonRepository}};
//!
//! async fn setup() -> Result<(), cadastro_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://database.db", 5).await?;
//!     db::init_schema_from_file(&pool, "schema.sql").await?;
//!
//!     let people = SqlitePersonRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
