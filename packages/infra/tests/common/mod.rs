//! テスト共通フィクスチャ
//!
//! インメモリ SQLite のプール生成とエンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use cadastro_domain::{
    city::{CityId, CityName, NewCity, StateCode},
    person::{Age, NewPerson, PersonName},
};
use cadastro_infra::db;
use sqlx::SqlitePool;

/// リポジトリルートのスキーマスクリプト
pub const SCHEMA: &str = include_str!("../../../../schema.sql");

/// スキーマ未適用のインメモリ DB プールを作成する
///
/// インメモリ DB は接続ごとに独立し、接続が閉じると消えるため、
/// 接続を 1 本に固定してアイドル切断も無効にする。
pub async fn empty_memory_pool() -> SqlitePool {
    db::pool_options()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(db::connect_options("sqlite::memory:").unwrap())
        .await
        .unwrap()
}

/// スキーマ適用済みのインメモリ DB プールを作成する
pub async fn memory_pool() -> SqlitePool {
    let pool = empty_memory_pool().await;
    db::init_schema(&pool, SCHEMA).await.unwrap();
    pool
}

pub fn new_person(name: &str, age: i64, city_id: i64) -> NewPerson {
    NewPerson {
        name:    PersonName::new(name).unwrap(),
        age:     Age::new(age).unwrap(),
        city_id: CityId::new(city_id).unwrap(),
    }
}

pub fn new_city(name: &str, state_code: &str) -> NewCity {
    NewCity {
        name:       CityName::new(name).unwrap(),
        state_code: StateCode::new(state_code).unwrap(),
    }
}

/// テーブルの行数を数える
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
