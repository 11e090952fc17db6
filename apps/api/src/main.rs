//! # Cadastro API サーバー
//!
//! 人物・都市の CRUD を提供する HTTP サーバーのエントリーポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://database.db`） |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `5`） |
//! | `SCHEMA_PATH` | No | スキーマスクリプト（デフォルト: `schema.sql`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p cadastro-api
//!
//! # テーブルの作成（既存データは削除される）
//! curl http://localhost:5000/initdb
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use cadastro_api::{app_builder::build_app, config::AppConfig};
use cadastro_infra::db;
use cadastro_shared::observability::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    init_tracing(config.log_format);

    tracing::info!(
        "Cadastro API サーバーを起動します: {}:{}",
        config.server.host,
        config.server.port
    );

    let pool = db::create_pool(&config.database.url, config.database.max_connections)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!(url = %config.database.url, "データベースに接続しました");

    let app = build_app(pool, config.schema_path);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Cadastro API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
