//! # Cadastro ドメイン層
//!
//! 人物（`dados`）と都市（`cidades`）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: DB が採番する整数 ID を持つ [`person::Person`], [`city::City`]
//! - **値オブジェクト**: 生成時に検証される名前・年齢・州コード
//! - **読み取りモデル**: 結合クエリの結果行 [`resident::Resident`]
//! - **ドメインエラー**: 入力値の検証失敗を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB）に一切依存しない。
//! 都市 ID と人物の関連は参照用であり、存在確認は行わない。
//!
//! ## 使用例
//!
//! ```rust
//! use cadastro_domain::{
//!     city::CityId,
//!     person::{Age, NewPerson, PersonName},
//! };
//!
//! # fn main() -> Result<(), cadastro_domain::DomainError> {
//! let person = NewPerson {
//!     name:    PersonName::new("Ana")?,
//!     age:     Age::new(30)?,
//!     city_id: CityId::new(1)?,
//! };
//! assert_eq!(person.name.as_str(), "Ana");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod city;
pub mod error;
pub mod person;
pub mod resident;

pub use error::DomainError;
