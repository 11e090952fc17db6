//! # トップページとスキーマ初期化
//!
//! - `GET /` - 利用可能なルートを列挙した HTML
//! - `GET /initdb` - スキーマスクリプトを実行してテーブルを再作成する
//!
//! `/initdb` は既存のテーブルを削除するため、実行するとすべてのデータが失われる。

use std::{path::PathBuf, sync::Arc};

use axum::{extract::State, response::Html};
use cadastro_infra::db;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// `/initdb` 成功時のレスポンス本文
pub const SCHEMA_INITIALIZED_MESSAGE: &str = "Banco de dados inicializado";

const HOME_PAGE: &str = "<h1>Bem vindo à API Cadastro</h1>\
<p>Rotas disponíveis:</p>\
<ul>\
<li>GET /initdb - inicializa o banco de dados</li>\
<li>POST /dados - insere uma pessoa (nome, idade, id_cidade)</li>\
<li>GET /dados - lista as pessoas</li>\
<li>GET /dados/&lt;id&gt; - consulta uma pessoa</li>\
<li>PUT /dados/&lt;id&gt; - altera uma pessoa</li>\
<li>DELETE /dados/&lt;id&gt; - remove uma pessoa</li>\
<li>POST /cidades - insere uma cidade (nome_cidade, uf_cidade)</li>\
<li>GET /cidades - lista as cidades</li>\
<li>GET /cidades/&lt;id&gt; - consulta uma cidade</li>\
<li>PUT /cidades/&lt;id&gt; - altera uma cidade</li>\
<li>DELETE /cidades/&lt;id&gt; - remove uma cidade</li>\
<li>GET /pessoascidade/&lt;nome_cidade&gt; - pessoas de uma cidade</li>\
<li>GET /health - liveness</li>\
<li>GET /health/ready - readiness</li>\
</ul>";

/// スキーマ初期化用の State
pub struct SchemaState {
    pub pool:        SqlitePool,
    pub schema_path: PathBuf,
}

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// GET /initdb
///
/// スクリプトの読み込み・実行に失敗した場合は 500 を返す。
#[tracing::instrument(skip_all, fields(schema_path = %state.schema_path.display()))]
pub async fn init_db(State(state): State<Arc<SchemaState>>) -> Result<&'static str, ApiError> {
    db::init_schema_from_file(&state.pool, &state.schema_path).await?;
    Ok(SCHEMA_INITIALIZED_MESSAGE)
}
