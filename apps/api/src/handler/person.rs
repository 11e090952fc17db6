//! # 人物ハンドラ
//!
//! 人物（`dados` テーブル）の CRUD を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /dados` - 人物一覧
//! - `POST /dados` - 人物作成
//! - `GET /dados/{id}` - 人物取得
//! - `PUT /dados/{id}` - 人物の全項目更新
//! - `DELETE /dados/{id}` - 人物削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use cadastro_domain::{
    city::CityId,
    person::{Age, NewPerson, Person, PersonId, PersonName},
};
use cadastro_infra::repository::PersonRepository;
use cadastro_shared::MessageResponse;
use serde::{Deserialize, Serialize};

use super::{CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE, json_body, non_blank};
use crate::error::ApiError;

/// 必須項目が欠けている場合のメッセージ
const REQUIRED_FIELDS_MESSAGE: &str = "Nome, idade e id da cidade são obrigatórios";

/// 人物 API の共有状態
pub struct PersonState {
    pub person_repository: Arc<dyn PersonRepository>,
}

// --- リクエスト/レスポンス型 ---

/// 年齢の入力値
///
/// JSON の整数と、整数を表す文字列（`"30"`）の両方を受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

impl AgeInput {
    /// 未入力扱い（`0` / 空文字）でないか
    fn is_present(&self) -> bool {
        match self {
            AgeInput::Number(n) => *n != 0,
            AgeInput::Text(s) => !s.trim().is_empty(),
        }
    }

    fn into_age(self) -> Result<Age, ApiError> {
        let age = match self {
            AgeInput::Number(n) => Age::new(n)?,
            AgeInput::Text(s) => Age::parse(&s)?,
        };
        Ok(age)
    }
}

/// 人物の作成・更新リクエスト
///
/// 必須判定をハンドラで行うため、すべてのフィールドを `Option` で受ける。
#[derive(Debug, Default, Deserialize)]
pub struct PersonRequest {
    pub nome:      Option<String>,
    pub idade:     Option<AgeInput>,
    pub id_cidade: Option<i64>,
}

impl PersonRequest {
    /// 必須チェックと値オブジェクトの構築を行う
    fn into_new_person(self) -> Result<NewPerson, ApiError> {
        let required = || ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string());

        let nome = non_blank(self.nome).ok_or_else(required)?;
        let idade = self.idade.filter(AgeInput::is_present).ok_or_else(required)?;
        let id_cidade = self.id_cidade.filter(|id| *id != 0).ok_or_else(required)?;

        Ok(NewPerson {
            name:    PersonName::new(nome)?,
            age:     idade.into_age()?,
            city_id: CityId::new(id_cidade)?,
        })
    }
}

/// 人物 DTO（キーは `dados` のカラム名）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDto {
    pub id:        i64,
    pub nome:      String,
    pub idade:     i64,
    pub id_cidade: i64,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id:        person.id().as_i64(),
            nome:      person.name().as_str().to_string(),
            idade:     person.age().as_i64(),
            id_cidade: person.city_id().as_i64(),
        }
    }
}

// --- ハンドラ ---

/// GET /dados
#[tracing::instrument(skip_all)]
pub async fn list_people(
    State(state): State<Arc<PersonState>>,
) -> Result<impl IntoResponse, ApiError> {
    let people = state.person_repository.find_all().await?;

    let items: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();
    Ok(Json(items))
}

/// GET /dados/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_person(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let person = state
        .person_repository
        .find_by_id(PersonId::from_db(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PersonDto::from(person)))
}

/// POST /dados
///
/// 採番された ID はレスポンスに含めない。
#[tracing::instrument(skip_all)]
pub async fn create_person(
    State(state): State<Arc<PersonState>>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let person = json_body(payload, REQUIRED_FIELDS_MESSAGE)?.into_new_person()?;

    let id = state.person_repository.insert(&person).await?;
    tracing::debug!(%id, "人物を作成しました");

    Ok(Json(MessageResponse::new(CREATED_MESSAGE)))
}

/// PUT /dados/{id}
///
/// 全項目を置き換える。対象が存在しなくても成功メッセージを返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_person(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<i64>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let person = json_body(payload, REQUIRED_FIELDS_MESSAGE)?.into_new_person()?;

    let affected = state
        .person_repository
        .update(PersonId::from_db(id), &person)
        .await?;
    tracing::debug!(affected, "人物を更新しました");

    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// DELETE /dados/{id}
///
/// 対象が存在しなくても成功メッセージを返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_person(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state
        .person_repository
        .delete(PersonId::from_db(id))
        .await?;
    tracing::debug!(affected, "人物を削除しました");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
