//! # CityRepository
//!
//! 都市（`cidades` テーブル）の永続化を担当するリポジトリ。
//! 主キーは `id_cidade`。

use async_trait::async_trait;
use cadastro_domain::city::{City, CityId, CityName, NewCity, StateCode};
use sqlx::SqlitePool;

use super::required;
use crate::error::InfraError;

/// 都市リポジトリトレイト
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// 全都市を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<City>, InfraError>;

    /// ID で都市を検索する
    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, InfraError>;

    /// 都市を挿入し、採番された ID を返す
    async fn insert(&self, city: &NewCity) -> Result<CityId, InfraError>;

    /// 都市名と州コードを更新し、影響行数を返す
    async fn update(&self, id: CityId, city: &NewCity) -> Result<u64, InfraError>;

    /// 都市を削除し、影響行数を返す
    ///
    /// この都市を参照する人物は削除しない。
    async fn delete(&self, id: CityId) -> Result<u64, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct CityRow {
    id_cidade:   i64,
    nome_cidade: Option<String>,
    uf_cidade:   Option<String>,
}

impl CityRow {
    fn into_city(self) -> Result<City, InfraError> {
        Ok(City::from_db(
            CityId::from_db(self.id_cidade),
            CityName::from_db(required(self.nome_cidade, "cidades", "nome_cidade")?),
            StateCode::from_db(required(self.uf_cidade, "cidades", "uf_cidade")?),
        ))
    }
}

/// SQLite 実装の CityRepository
#[derive(Debug, Clone)]
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqliteCityRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<City>, InfraError> {
        let rows = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id_cidade, nome_cidade, uf_cidade
            FROM cidades
            ORDER BY id_cidade
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CityRow::into_city).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, InfraError> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id_cidade, nome_cidade, uf_cidade
            FROM cidades
            WHERE id_cidade = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CityRow::into_city).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(state_code = %city.state_code))]
    async fn insert(&self, city: &NewCity) -> Result<CityId, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cidades (nome_cidade, uf_cidade)
            VALUES (?, ?)
            "#,
        )
        .bind(city.name.as_str())
        .bind(city.state_code.as_str())
        .execute(&self.pool)
        .await?;

        Ok(CityId::from_db(result.last_insert_rowid()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: CityId, city: &NewCity) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE cidades
            SET nome_cidade = ?, uf_cidade = ?
            WHERE id_cidade = ?
            "#,
        )
        .bind(city.name.as_str())
        .bind(city.state_code.as_str())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: CityId) -> Result<u64, InfraError> {
        let result = sqlx::query("DELETE FROM cidades WHERE id_cidade = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
