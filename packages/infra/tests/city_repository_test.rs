//! CityRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! cargo test -p cadastro-infra --test city_repository_test
//! ```

mod common;

use cadastro_domain::city::CityId;
use cadastro_infra::repository::{
    CityRepository,
    PersonRepository,
    SqliteCityRepository,
    SqlitePersonRepository,
};
use common::{count_rows, memory_pool, new_city, new_person};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_insertした都市をfind_by_idで取得できる() {
    let pool = memory_pool().await;
    let sut = SqliteCityRepository::new(pool);

    let id = sut.insert(&new_city("Recife", "PE")).await.unwrap();
    let found = sut.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(id.as_i64(), 1);
    assert_eq!(found.name().as_str(), "Recife");
    assert_eq!(found.state_code().as_str(), "PE");
}

#[tokio::test]
async fn test_find_allはid_cidade順で全件を返す() {
    let pool = memory_pool().await;
    let sut = SqliteCityRepository::new(pool);
    sut.insert(&new_city("Recife", "PE")).await.unwrap();
    sut.insert(&new_city("Salvador", "BA")).await.unwrap();

    let cities = sut.find_all().await.unwrap();

    let ids: Vec<i64> = cities.iter().map(|c| c.id().as_i64()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(cities[1].name().as_str(), "Salvador");
}

#[tokio::test]
async fn test_updateはid_cidadeで対象を特定する() {
    let pool = memory_pool().await;
    let sut = SqliteCityRepository::new(pool);
    let first = sut.insert(&new_city("Recife", "PE")).await.unwrap();
    let second = sut.insert(&new_city("Natal", "RN")).await.unwrap();

    let affected = sut.update(second, &new_city("Natal", "PB")).await.unwrap();

    assert_eq!(affected, 1);
    let updated = sut.find_by_id(second).await.unwrap().unwrap();
    assert_eq!(updated.state_code().as_str(), "PB");
    let untouched = sut.find_by_id(first).await.unwrap().unwrap();
    assert_eq!(untouched.state_code().as_str(), "PE");
}

#[tokio::test]
async fn test_存在しないidのupdateとdeleteは影響行数0() {
    let pool = memory_pool().await;
    let sut = SqliteCityRepository::new(pool.clone());
    sut.insert(&new_city("Recife", "PE")).await.unwrap();

    let missing = CityId::from_db(999);
    assert_eq!(sut.update(missing, &new_city("X", "XX")).await.unwrap(), 0);
    assert_eq!(sut.delete(missing).await.unwrap(), 0);
    assert_eq!(count_rows(&pool, "cidades").await, 1);
}

#[tokio::test]
async fn test_都市を削除しても参照する人物は残る() {
    // Arrange
    let pool = memory_pool().await;
    let sut = SqliteCityRepository::new(pool.clone());
    let people = SqlitePersonRepository::new(pool.clone());
    let recife = sut.insert(&new_city("Recife", "PE")).await.unwrap();
    people
        .insert(&new_person("Ana", 30, recife.as_i64()))
        .await
        .unwrap();

    // Act
    let affected = sut.delete(recife).await.unwrap();

    // Assert
    assert_eq!(affected, 1);
    assert_eq!(count_rows(&pool, "cidades").await, 0);
    assert_eq!(count_rows(&pool, "dados").await, 1);
    assert!(
        people
            .find_residents_by_city_name("Recife")
            .await
            .unwrap()
            .is_empty()
    );
}
