//! # 都市別居住者（結合クエリの結果行）
//!
//! `dados` と `cidades` を `id_cidade` で内部結合した読み取り専用モデル。
//! 人物 ID と都市 ID は射影に含まれない。

use crate::{
    city::{CityName, StateCode},
    person::{Age, PersonName},
};

/// 都市名で絞り込んだ人物と、その都市の情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub name:       PersonName,
    pub age:        Age,
    pub city_name:  CityName,
    pub state_code: StateCode,
}
