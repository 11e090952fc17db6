//! # PersonRepository
//!
//! 人物（`dados` テーブル）の永続化と、都市名による結合検索を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **全項目置換**: 更新は `nome`, `idade`, `id_cidade` をまとめて書き換える
//! - **影響行数を返す**: 更新・削除は対象の有無を判定せず、影響行数だけを返す
//! - **都市参照は検証しない**: `id_cidade` に対応する都市の存在は確認しない

use async_trait::async_trait;
use cadastro_domain::{
    city::{CityId, CityName, StateCode},
    person::{Age, NewPerson, Person, PersonId, PersonName},
    resident::Resident,
};
use sqlx::SqlitePool;

use super::required;
use crate::error::InfraError;

/// 人物リポジトリトレイト
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// 全人物を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Person>, InfraError>;

    /// ID で人物を検索する
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, InfraError>;

    /// 人物を挿入し、採番された ID を返す
    async fn insert(&self, person: &NewPerson) -> Result<PersonId, InfraError>;

    /// 人物の全項目を更新し、影響行数を返す
    async fn update(&self, id: PersonId, person: &NewPerson) -> Result<u64, InfraError>;

    /// 人物を削除し、影響行数を返す
    async fn delete(&self, id: PersonId) -> Result<u64, InfraError>;

    /// 都市名（完全一致）で人物と都市を結合検索する
    async fn find_residents_by_city_name(
        &self,
        city_name: &str,
    ) -> Result<Vec<Resident>, InfraError>;
}

/// `dados` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct PersonRow {
    id:        i64,
    nome:      Option<String>,
    idade:     Option<i64>,
    id_cidade: Option<i64>,
}

impl PersonRow {
    fn into_person(self) -> Result<Person, InfraError> {
        Ok(Person::from_db(
            PersonId::from_db(self.id),
            PersonName::from_db(required(self.nome, "dados", "nome")?),
            Age::from_db(required(self.idade, "dados", "idade")?),
            CityId::from_db(required(self.id_cidade, "dados", "id_cidade")?),
        ))
    }
}

/// 結合クエリの結果行
#[derive(Debug, sqlx::FromRow)]
struct ResidentRow {
    nome:        Option<String>,
    idade:       Option<i64>,
    nome_cidade: Option<String>,
    uf_cidade:   Option<String>,
}

impl ResidentRow {
    fn into_resident(self) -> Result<Resident, InfraError> {
        Ok(Resident {
            name:       PersonName::from_db(required(self.nome, "dados", "nome")?),
            age:        Age::from_db(required(self.idade, "dados", "idade")?),
            city_name:  CityName::from_db(required(self.nome_cidade, "cidades", "nome_cidade")?),
            state_code: StateCode::from_db(required(self.uf_cidade, "cidades", "uf_cidade")?),
        })
    }
}

/// SQLite 実装の PersonRepository
#[derive(Debug, Clone)]
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Person>, InfraError> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, nome, idade, id_cidade
            FROM dados
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PersonRow::into_person).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, InfraError> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT id, nome, idade, id_cidade
            FROM dados
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PersonRow::into_person).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(city_id = %person.city_id))]
    async fn insert(&self, person: &NewPerson) -> Result<PersonId, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO dados (nome, idade, id_cidade)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(person.name.as_str())
        .bind(person.age.as_i64())
        .bind(person.city_id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(PersonId::from_db(result.last_insert_rowid()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: PersonId, person: &NewPerson) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE dados
            SET nome = ?, idade = ?, id_cidade = ?
            WHERE id = ?
            "#,
        )
        .bind(person.name.as_str())
        .bind(person.age.as_i64())
        .bind(person.city_id.as_i64())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: PersonId) -> Result<u64, InfraError> {
        let result = sqlx::query("DELETE FROM dados WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%city_name))]
    async fn find_residents_by_city_name(
        &self,
        city_name: &str,
    ) -> Result<Vec<Resident>, InfraError> {
        let rows = sqlx::query_as::<_, ResidentRow>(
            r#"
            SELECT dados.nome, dados.idade, cidades.nome_cidade, cidades.uf_cidade
            FROM dados
            INNER JOIN cidades ON dados.id_cidade = cidades.id_cidade
            WHERE cidades.nome_cidade = ?
            ORDER BY dados.id
            "#,
        )
        .bind(city_name)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ResidentRow::into_resident).collect()
    }
}
