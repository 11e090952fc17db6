//! API 統合テスト
//!
//! 実際のルーター・リポジトリ・インメモリ SQLite を組み合わせ、
//! HTTP リクエストからテーブルの状態までを通して検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p cadastro-api --test api_integration_test
//! ```

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use cadastro_api::app_builder::build_app;
use cadastro_infra::db;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// リポジトリルートのスキーマスクリプト
const SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../schema.sql");

// =============================================================================
// ヘルパー
// =============================================================================

/// 接続を 1 本に固定したインメモリ DB プール
async fn memory_pool() -> SqlitePool {
    db::pool_options()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(db::connect_options("sqlite::memory:").unwrap())
        .await
        .unwrap()
}

/// `/initdb` でスキーマを作成済みのアプリケーション
async fn initialized_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    let app = build_app(pool.clone(), SCHEMA_PATH);

    let response = send(&app, Method::GET, "/initdb", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    (app, pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// =============================================================================
// テストケース
// =============================================================================

#[tokio::test]
async fn test_都市と人物を作成すると都市名で結合検索できる() {
    // Given
    let (app, _pool) = initialized_app().await;

    // When
    let city = send(
        &app,
        Method::POST,
        "/cidades",
        Some(json!({"nome_cidade": "Recife", "uf_cidade": "PE"})),
    )
    .await;
    let person = send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": 30, "id_cidade": 1})),
    )
    .await;
    let residents = send(&app, Method::GET, "/pessoascidade/Recife", None).await;

    // Then
    assert_eq!(city.status(), StatusCode::OK);
    assert_eq!(
        json_body(city).await,
        json!({"message": "Dados inseridos com sucesso"})
    );
    assert_eq!(person.status(), StatusCode::OK);
    assert_eq!(residents.status(), StatusCode::OK);
    assert_eq!(
        json_body(residents).await,
        json!([{"nome": "Ana", "idade": 30, "nome_cidade": "Recife", "uf_cidade": "PE"}])
    );
}

#[tokio::test]
async fn test_作成した人物は採番されたidで同じ値のまま取得できる() {
    let (app, _pool) = initialized_app().await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": "30", "id_cidade": 1})),
    )
    .await;

    let response = send(&app, Method::GET, "/dados/1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": 1, "nome": "Ana", "idade": 30, "id_cidade": 1})
    );
}

#[tokio::test]
async fn test_入力値は前後の空白や符号を含めて変更されずに保存される() {
    let (app, _pool) = initialized_app().await;
    let long_name = "a".repeat(101);
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "  Ana  ", "idade": 30, "id_cidade": 1})),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": long_name, "idade": -3, "id_cidade": -1})),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/cidades",
        Some(json!({"nome_cidade": " Recife ", "uf_cidade": "PE"})),
    )
    .await;

    let first = send(&app, Method::GET, "/dados/1", None).await;
    let second = send(&app, Method::GET, "/dados/2", None).await;
    let city = send(&app, Method::GET, "/cidades/1", None).await;

    assert_eq!(
        json_body(first).await,
        json!({"id": 1, "nome": "  Ana  ", "idade": 30, "id_cidade": 1})
    );
    assert_eq!(
        json_body(second).await,
        json!({"id": 2, "nome": long_name, "idade": -3, "id_cidade": -1})
    );
    assert_eq!(
        json_body(city).await,
        json!({"id_cidade": 1, "nome_cidade": " Recife ", "uf_cidade": "PE"})
    );
}

#[tokio::test]
async fn test_必須項目が欠けた作成はテーブルを変更しない() {
    let (app, pool) = initialized_app().await;

    let person = send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "id_cidade": 1})),
    )
    .await;
    let city = send(
        &app,
        Method::POST,
        "/cidades",
        Some(json!({"nome_cidade": "Recife"})),
    )
    .await;

    assert_eq!(person.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(person).await,
        json!({"error": "Nome, idade e id da cidade são obrigatórios"})
    );
    assert_eq!(city.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(city).await,
        json!({"error": "Cidade e UF são obrigatórios"})
    );
    assert_eq!(count_rows(&pool, "dados").await, 0);
    assert_eq!(count_rows(&pool, "cidades").await, 0);
}

#[tokio::test]
async fn test_更新後の取得は最新の値を返す() {
    // Given
    let (app, _pool) = initialized_app().await;
    send(
        &app,
        Method::POST,
        "/cidades",
        Some(json!({"nome_cidade": "Recife", "uf_cidade": "PE"})),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": 30, "id_cidade": 1})),
    )
    .await;

    // When
    let person = send(
        &app,
        Method::PUT,
        "/dados/1",
        Some(json!({"nome": "Ana Maria", "idade": 31, "id_cidade": 1})),
    )
    .await;
    let city = send(
        &app,
        Method::PUT,
        "/cidades/1",
        Some(json!({"nome_cidade": "Recife", "uf_cidade": "PB"})),
    )
    .await;

    // Then
    assert_eq!(
        json_body(person).await,
        json!({"message": "Dados alterados com sucesso!"})
    );
    assert_eq!(city.status(), StatusCode::OK);
    assert_eq!(
        json_body(send(&app, Method::GET, "/dados/1", None).await).await,
        json!({"id": 1, "nome": "Ana Maria", "idade": 31, "id_cidade": 1})
    );
    assert_eq!(
        json_body(send(&app, Method::GET, "/cidades/1", None).await).await,
        json!({"id_cidade": 1, "nome_cidade": "Recife", "uf_cidade": "PB"})
    );
}

#[tokio::test]
async fn test_存在しないidの削除は成功メッセージで行数は変わらない() {
    let (app, pool) = initialized_app().await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": 30, "id_cidade": 1})),
    )
    .await;

    let response = send(&app, Method::DELETE, "/dados/99", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Registro deletado com sucesso"})
    );
    assert_eq!(count_rows(&pool, "dados").await, 1);
}

#[tokio::test]
async fn test_削除した人物は404になる() {
    let (app, _pool) = initialized_app().await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": 30, "id_cidade": 1})),
    )
    .await;

    send(&app, Method::DELETE, "/dados/1", None).await;
    let response = send(&app, Method::GET, "/dados/1", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Dado não encontrado"})
    );
}

#[tokio::test]
async fn test_一覧の件数はテーブルの行数と一致する() {
    let (app, pool) = initialized_app().await;
    for (name, uf) in [("Recife", "PE"), ("Natal", "RN"), ("Salvador", "BA")] {
        send(
            &app,
            Method::POST,
            "/cidades",
            Some(json!({"nome_cidade": name, "uf_cidade": uf})),
        )
        .await;
    }

    let response = send(&app, Method::GET, "/cidades", None).await;

    let body = json_body(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len() as i64, count_rows(&pool, "cidades").await);
    assert_eq!(
        items[2],
        json!({"id_cidade": 3, "nome_cidade": "Salvador", "uf_cidade": "BA"})
    );
}

#[tokio::test]
async fn test_都市名に紐づくn人の人物がn行で返る() {
    let (app, _pool) = initialized_app().await;
    for (name, uf) in [("Recife", "PE"), ("Olinda", "PE")] {
        send(
            &app,
            Method::POST,
            "/cidades",
            Some(json!({"nome_cidade": name, "uf_cidade": uf})),
        )
        .await;
    }
    for (name, city_id) in [("Ana", 1), ("Bruno", 2), ("Carla", 1), ("Davi", 1)] {
        send(
            &app,
            Method::POST,
            "/dados",
            Some(json!({"nome": name, "idade": 20, "id_cidade": city_id})),
        )
        .await;
    }

    let response = send(&app, Method::GET, "/pessoascidade/Recife", None).await;

    let body = json_body(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Carla", "Davi"]);
}

#[tokio::test]
async fn test_スキーマ未作成のdbエラーは500とドライバのメッセージ() {
    let pool = memory_pool().await;
    let app = build_app(pool, SCHEMA_PATH);

    let response = send(&app, Method::GET, "/dados", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "no such table: dados"})
    );
}

#[tokio::test]
async fn test_initdbは既存データを消してテーブルを再作成する() {
    let (app, pool) = initialized_app().await;
    send(
        &app,
        Method::POST,
        "/dados",
        Some(json!({"nome": "Ana", "idade": 30, "id_cidade": 1})),
    )
    .await;

    let response = send(&app, Method::GET, "/initdb", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], "Banco de dados inicializado".as_bytes());
    assert_eq!(count_rows(&pool, "dados").await, 0);
}

#[tokio::test]
async fn test_スキーマファイルが無ければinitdbは500() {
    let pool = memory_pool().await;
    let app = build_app(pool, "/nonexistent/schema.sql");

    let response = send(&app, Method::GET, "/initdb", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("/nonexistent/schema.sql: ")
    );
}

#[tokio::test]
async fn test_readinessはdbに接続できれば200() {
    let (app, _pool) = initialized_app().await;

    let response = send(&app, Method::GET, "/health/ready", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"status": "ready", "checks": {"database": "ok"}})
    );
}

#[tokio::test]
async fn test_未定義のルートは404() {
    let (app, _pool) = initialized_app().await;

    let response = send(&app, Method::GET, "/usuarios", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
