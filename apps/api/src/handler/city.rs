//! # 都市ハンドラ
//!
//! 都市（`cidades` テーブル）の CRUD を提供する。ID は `id_cidade`。
//!
//! ## エンドポイント
//!
//! - `GET /cidades` - 都市一覧
//! - `POST /cidades` - 都市作成
//! - `GET /cidades/{id}` - 都市取得
//! - `PUT /cidades/{id}` - 都市名・州コードの更新
//! - `DELETE /cidades/{id}` - 都市削除（参照する人物は残る）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use cadastro_domain::city::{City, CityId, CityName, NewCity, StateCode};
use cadastro_infra::repository::CityRepository;
use cadastro_shared::MessageResponse;
use serde::{Deserialize, Serialize};

use super::{CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE, json_body, non_blank};
use crate::error::ApiError;

const CREATE_REQUIRED_MESSAGE: &str = "Cidade e UF são obrigatórios";
const UPDATE_REQUIRED_MESSAGE: &str = "Nome e uf são obrigatórios";

/// 都市 API の共有状態
pub struct CityState {
    pub city_repository: Arc<dyn CityRepository>,
}

// --- リクエスト/レスポンス型 ---

/// 都市の作成・更新リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CityRequest {
    pub nome_cidade: Option<String>,
    pub uf_cidade:   Option<String>,
}

impl CityRequest {
    /// 必須チェックと値オブジェクトの構築を行う
    ///
    /// 必須項目が欠けている場合は `required_message` を返す。
    fn into_new_city(self, required_message: &str) -> Result<NewCity, ApiError> {
        let required = || ApiError::Validation(required_message.to_string());

        let nome_cidade = non_blank(self.nome_cidade).ok_or_else(required)?;
        let uf_cidade = non_blank(self.uf_cidade).ok_or_else(required)?;

        Ok(NewCity {
            name:       CityName::new(nome_cidade)?,
            state_code: StateCode::new(uf_cidade)?,
        })
    }
}

/// 都市 DTO（キーは `cidades` のカラム名）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDto {
    pub id_cidade:   i64,
    pub nome_cidade: String,
    pub uf_cidade:   String,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id_cidade:   city.id().as_i64(),
            nome_cidade: city.name().as_str().to_string(),
            uf_cidade:   city.state_code().as_str().to_string(),
        }
    }
}

// --- ハンドラ ---

/// GET /cidades
#[tracing::instrument(skip_all)]
pub async fn list_cities(
    State(state): State<Arc<CityState>>,
) -> Result<impl IntoResponse, ApiError> {
    let cities = state.city_repository.find_all().await?;

    let items: Vec<CityDto> = cities.into_iter().map(CityDto::from).collect();
    Ok(Json(items))
}

/// GET /cidades/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_city(
    State(state): State<Arc<CityState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let city = state
        .city_repository
        .find_by_id(CityId::from_db(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(CityDto::from(city)))
}

/// POST /cidades
#[tracing::instrument(skip_all)]
pub async fn create_city(
    State(state): State<Arc<CityState>>,
    payload: Result<Json<CityRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let city =
        json_body(payload, CREATE_REQUIRED_MESSAGE)?.into_new_city(CREATE_REQUIRED_MESSAGE)?;

    let id = state.city_repository.insert(&city).await?;
    tracing::debug!(%id, "都市を作成しました");

    Ok(Json(MessageResponse::new(CREATED_MESSAGE)))
}

/// PUT /cidades/{id}
///
/// `cidades` の行を `id_cidade` で特定して更新する。
/// 対象が存在しなくても成功メッセージを返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_city(
    State(state): State<Arc<CityState>>,
    Path(id): Path<i64>,
    payload: Result<Json<CityRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let city =
        json_body(payload, UPDATE_REQUIRED_MESSAGE)?.into_new_city(UPDATE_REQUIRED_MESSAGE)?;

    let affected = state
        .city_repository
        .update(CityId::from_db(id), &city)
        .await?;
    tracing::debug!(affected, "都市を更新しました");

    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// DELETE /cidades/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_city(
    State(state): State<Arc<CityState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state.city_repository.delete(CityId::from_db(id)).await?;
    tracing::debug!(affected, "都市を削除しました");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
