//! # SQLite データベース接続管理
//!
//! 接続プールの作成、スキーマの初期化、疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: リクエストごとに接続を張り直さず、プールから借りて返す
//! - **文単位の接続スコープ**: リポジトリはクエリ 1 文ごとにプールから接続を取得し、
//!   文の完了（成功・失敗を問わず）でドロップしてプールへ返却する
//! - **自動コミット**: 各操作は単一文のため、明示的なトランザクションは張らない
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use cadastro_infra::db;
//!
//! async fn example() -> Result<(), cadastro_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://database.db", 5).await?;
//!     db::ping(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 接続取得のタイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// 接続 URL から SQLite の接続オプションを作成する
///
/// DB ファイルが存在しない場合は作成する。
///
/// # 引数
///
/// * `database_url` - `sqlite://path/to/file.db` 形式、またはテスト用の `sqlite::memory:`
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, InfraError> {
    Ok(SqliteConnectOptions::from_str(database_url)?.create_if_missing(true))
}

/// 共通設定を適用した `SqlitePoolOptions` を返す
///
/// テストではインメモリ DB が消えないよう `max_connections(1)` と
/// `idle_timeout(None)` を追加して使用する。
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new().acquire_timeout(ACQUIRE_TIMEOUT)
}

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// 全リポジトリで共有する（`SqlitePool` は内部で `Arc` を持つため clone は安価）。
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL
/// * `max_connections` - 最大接続数
#[tracing::instrument(skip_all, fields(%database_url, max_connections = max_connections))]
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, InfraError> {
    let pool = pool_options()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;
    Ok(pool)
}

/// スキーマスクリプトを実行してテーブルを（再）作成する
///
/// スクリプトは複数文を含むため、プリペアドステートメントではなく
/// `raw_sql` で一括実行する。スクリプトの内容には関知しない。
#[tracing::instrument(skip_all, level = "debug")]
pub async fn init_schema(pool: &SqlitePool, script: &str) -> Result<(), InfraError> {
    sqlx::raw_sql(script).execute(pool).await?;
    Ok(())
}

/// ファイルからスキーマスクリプトを読み込んで実行する
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn init_schema_from_file(
    pool: &SqlitePool,
    path: impl AsRef<Path>,
) -> Result<(), InfraError> {
    let path = path.as_ref();
    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InfraError::schema_script(path.display().to_string(), e))?;
    init_schema(pool, &script).await?;
    tracing::info!("スキーマを初期化しました");
    Ok(())
}

/// DB への疎通を `SELECT 1` で確認する
#[tracing::instrument(skip_all, level = "debug")]
pub async fn ping(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
