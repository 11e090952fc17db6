//! # 都市（`cidades` テーブル）
//!
//! 都市名と州コード（UF）を持つ都市エンティティ。
//! 検索・結合のキーは都市名ではなく `id_cidade` である。

use crate::DomainError;

define_integer_id! {
    /// 都市 ID（`cidades.id_cidade`）
    pub struct CityId {
        label: "Id da cidade",
    }
}

define_validated_string! {
    /// 都市名（値オブジェクト）
    pub struct CityName {
        label: "Cidade",
    }
}

/// 州コード（UF、値オブジェクト）
///
/// ブラジルの州略号（`PE`, `SP` など）を想定し、最大 2 文字とする。
/// trim や大文字化などの正規化は行わず、入力値をそのまま保持する。
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct StateCode(String);

impl StateCode {
    /// 州コードの最大文字数
    pub const MAX_LENGTH: usize = 2;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation("UF é obrigatória".to_string()));
        }

        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "UF deve ter no máximo {} caracteres",
                Self::MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// DB に格納済みの値から復元する
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 挿入・全項目更新に使う都市データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name:       CityName,
    pub state_code: StateCode,
}

/// 都市エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    id:         CityId,
    name:       CityName,
    state_code: StateCode,
}

impl City {
    /// DB から読み出した値でエンティティを復元する
    pub fn from_db(id: CityId, name: CityName, state_code: StateCode) -> Self {
        Self {
            id,
            name,
            state_code,
        }
    }

    pub fn id(&self) -> CityId {
        self.id
    }

    pub fn name(&self) -> &CityName {
        &self.name
    }

    pub fn state_code(&self) -> &StateCode {
        &self.state_code
    }
}
