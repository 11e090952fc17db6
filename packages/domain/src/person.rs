//! # 人物（`dados` テーブル）
//!
//! 名前・年齢・所属都市 ID を持つ人物エンティティ。
//!
//! ## 設計方針
//!
//! - **ID は DB 採番**: 挿入時には ID を持たない [`NewPerson`] を使い、
//!   読み出し時に [`Person`] として ID 付きで復元する
//! - **全項目置換**: 更新も [`NewPerson`] を使い、部分更新は提供しない
//! - **都市参照は助言的**: `city_id` が実在する都市を指すかは検証しない

use serde::{Deserialize, Serialize};

use crate::{DomainError, city::CityId};

define_integer_id! {
    /// 人物 ID（`dados.id`）
    pub struct PersonId {
        label: "Id",
    }
}

define_validated_string! {
    /// 人物名（値オブジェクト）
    pub struct PersonName {
        label: "Nome",
    }
}

/// 年齢（値オブジェクト）
///
/// # 不変条件
///
/// - 0 以外の整数（0 は未入力として扱う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Age(i64);

impl Age {
    /// 整数から年齢を作成する
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::Validation("Idade é obrigatória".to_string()));
        }
        Ok(Self(value))
    }

    /// 10 進整数の文字列から年齢を作成する
    ///
    /// JSON で `"30"` のように文字列として送られた年齢を受け付ける。
    /// 前後の空白は無視し、小数や数字以外は受け付けない。
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("Idade inválida: {text:?}")))?;
        Self::new(value)
    }

    /// DB の値から復元する
    pub fn from_db(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 挿入・全項目更新に使う人物データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name:    PersonName,
    pub age:     Age,
    pub city_id: CityId,
}

/// 人物エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id:      PersonId,
    name:    PersonName,
    age:     Age,
    city_id: CityId,
}

impl Person {
    /// DB から読み出した値でエンティティを復元する
    pub fn from_db(id: PersonId, name: PersonName, age: Age, city_id: CityId) -> Self {
        Self {
            id,
            name,
            age,
            city_id,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn city_id(&self) -> CityId {
        self.city_id
    }
}
