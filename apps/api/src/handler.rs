//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証は値オブジェクト、SQL はリポジトリに委譲

pub mod city;
pub mod health;
pub mod home;
pub mod person;
pub mod resident;

use axum::{Json, extract::rejection::JsonRejection};
pub use city::{CityState, create_city, delete_city, get_city, list_cities, update_city};
pub use health::{ReadinessState, health_check, readiness_check};
pub use home::{SchemaState, home, init_db};
pub use person::{
    PersonState,
    create_person,
    delete_person,
    get_person,
    list_people,
    update_person,
};
pub use resident::list_residents_by_city;

use crate::error::ApiError;

/// 作成・更新が成功した場合のメッセージ
pub(crate) const CREATED_MESSAGE: &str = "Dados inseridos com sucesso";
pub(crate) const UPDATED_MESSAGE: &str = "Dados alterados com sucesso!";
pub(crate) const DELETED_MESSAGE: &str = "Registro deletado com sucesso";

/// JSON ボディの抽出結果を取り出す
///
/// 構文エラー・Content-Type 不一致・型不一致はすべて、
/// エンドポイント固有の検証メッセージを持つ [`ApiError::Validation`] にする。
pub(crate) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    validation_message: &str,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(%rejection, "JSON ボディを解釈できません");
            Err(ApiError::Validation(validation_message.to_string()))
        }
    }
}

/// 文字列フィールドが入力されているか（空白のみは未入力）
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
