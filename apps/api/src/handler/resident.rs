//! # 都市別居住者ハンドラ
//!
//! `GET /pessoascidade/{nome_cidade}` で、都市名に一致する都市に属する人物を
//! 都市情報と結合して返す。都市名は完全一致で比較する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use cadastro_domain::resident::Resident;
use serde::{Deserialize, Serialize};

use super::PersonState;
use crate::error::ApiError;

/// 結合結果の DTO
///
/// 人物 ID と都市 ID は含まない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentDto {
    pub nome:        String,
    pub idade:       i64,
    pub nome_cidade: String,
    pub uf_cidade:   String,
}

impl From<Resident> for ResidentDto {
    fn from(resident: Resident) -> Self {
        Self {
            nome:        resident.name.into_string(),
            idade:       resident.age.as_i64(),
            nome_cidade: resident.city_name.into_string(),
            uf_cidade:   resident.state_code.as_str().to_string(),
        }
    }
}

/// GET /pessoascidade/{nome_cidade}
#[tracing::instrument(skip_all, fields(%nome_cidade))]
pub async fn list_residents_by_city(
    State(state): State<Arc<PersonState>>,
    Path(nome_cidade): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let residents = state
        .person_repository
        .find_residents_by_city_name(&nome_cidade)
        .await?;

    let items: Vec<ResidentDto> = residents.into_iter().map(ResidentDto::from).collect();
    Ok(Json(items))
}
