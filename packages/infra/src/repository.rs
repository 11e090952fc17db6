//! # リポジトリ実装
//!
//! 人物・都市テーブルへのアクセスをトレイトとして定義し、SQLite 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ハンドラはトレイト（`Arc<dyn ...>`）経由でリポジトリを利用する
//! - **パラメータ化 SQL**: ユーザー入力は必ずバインドパラメータとして渡す
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能な設計

pub mod city_repository;
pub mod person_repository;

pub use city_repository::{CityRepository, SqliteCityRepository};
pub use person_repository::{PersonRepository, SqlitePersonRepository};

use crate::error::InfraError;

/// NULL 許容カラムの値を取り出す
///
/// スキーマに NOT NULL 制約がないため、NULL は格納データの破損として扱う。
fn required<T>(value: Option<T>, table: &str, column: &str) -> Result<T, InfraError> {
    value.ok_or_else(|| InfraError::unexpected(format!("{table}.{column} が NULL です")))
}
