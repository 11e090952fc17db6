//! # アプリケーション構築
//!
//! リポジトリと State の初期化、ルーター構築を担当する。
//! `main.rs` は設定読み込み・接続プール作成・サーバー起動に集中する。

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use cadastro_infra::repository::{SqliteCityRepository, SqlitePersonRepository};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::handler::{
    CityState,
    PersonState,
    ReadinessState,
    SchemaState,
    create_city,
    create_person,
    delete_city,
    delete_person,
    get_city,
    get_person,
    health_check,
    home,
    init_db,
    list_cities,
    list_people,
    list_residents_by_city,
    readiness_check,
    update_city,
    update_person,
};

/// State の組み立てとルーター定義を行う
///
/// すべてのリポジトリは同じ接続プールを共有する。
pub fn build_app(pool: SqlitePool, schema_path: impl Into<PathBuf>) -> Router {
    let person_state = Arc::new(PersonState {
        person_repository: Arc::new(SqlitePersonRepository::new(pool.clone())),
    });
    let city_state = Arc::new(CityState {
        city_repository: Arc::new(SqliteCityRepository::new(pool.clone())),
    });
    let schema_state = Arc::new(SchemaState {
        pool:        pool.clone(),
        schema_path: schema_path.into(),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state)
        .route("/initdb", get(init_db))
        .with_state(schema_state)
        // 人物 API
        .route("/dados", get(list_people).post(create_person))
        .route(
            "/dados/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/pessoascidade/{nome_cidade}", get(list_residents_by_city))
        .with_state(person_state)
        // 都市 API
        .route("/cidades", get(list_cities).post(create_city))
        .route(
            "/cidades/{id}",
            get(get_city).put(update_city).delete(delete_city),
        )
        .with_state(city_state)
        .layer(TraceLayer::new_for_http())
}
