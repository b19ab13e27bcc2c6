//! End-to-end tests for the seeding pass.
//!
//! These tests need a running MongoDB deployment and are ignored by default.
//! Point `MONGODB_URI` at one (defaults to `mongodb://localhost:27017`) and
//! run `cargo test -- --ignored`.

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Database};

use expenses_seed::{
    DbError, SeedSummary, db,
    models::{Expense, User},
    seed_database,
};

/// Connect to the test deployment and drop `name` so each test starts from an
/// empty database.
async fn fresh_database(name: &str) -> Database {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&uri)
        .await
        .expect("could not connect to MongoDB");

    let database = client.database(name);
    database.drop().await.expect("could not drop test database");

    database
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn seeding_an_empty_database_yields_expected_counts() {
    let database = fresh_database("expenses_seed_test_counts").await;

    let summary = seed_database(&database).await.unwrap();

    assert_eq!(
        summary,
        SeedSummary {
            users: 3,
            categories: 5,
            expenses: 3,
        }
    );
    assert_eq!(
        db::users(&database).count_documents(doc! {}).await.unwrap(),
        3
    );
    assert_eq!(
        db::categories(&database)
            .count_documents(doc! {})
            .await
            .unwrap(),
        5
    );
    assert_eq!(
        db::expenses(&database)
            .count_documents(doc! {})
            .await
            .unwrap(),
        3
    );
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn expenses_reference_the_matching_user_and_category() {
    let database = fresh_database("expenses_seed_test_references").await;

    seed_database(&database).await.unwrap();

    let juan = db::users(&database)
        .find_one(doc! { "username": "juan.perez" })
        .await
        .unwrap()
        .expect("seeded user missing");
    let groceries = db::expenses(&database)
        .find_one(doc! { "description": "Supermercado para la semana" })
        .await
        .unwrap()
        .expect("seeded expense missing");
    let food = db::categories(&database)
        .find_one(doc! { "name": "Alimentación" })
        .await
        .unwrap()
        .expect("seeded category missing");

    assert_eq!(groceries.user_id, juan.id);
    assert_eq!(groceries.category_id, food.id);
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn reseeding_fails_with_duplicate_key() {
    let database = fresh_database("expenses_seed_test_rerun").await;

    seed_database(&database).await.unwrap();
    let result = seed_database(&database).await;

    assert!(matches!(result, Err(DbError::DuplicateKey)), "{result:?}");
    // The second pass aborted at the users insert, before touching the other
    // collections.
    assert_eq!(
        db::categories(&database)
            .count_documents(doc! {})
            .await
            .unwrap(),
        5
    );
    assert_eq!(
        db::expenses(&database)
            .count_documents(doc! {})
            .await
            .unwrap(),
        3
    );
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn unique_index_rejects_duplicate_username() {
    let database = fresh_database("expenses_seed_test_unique").await;

    seed_database(&database).await.unwrap();

    let duplicate = User {
        id: None,
        username: "juan.perez".to_string(),
        email: "otro.juan@email.com".to_string(),
        full_name: "Otro Juan".to_string(),
        created_at: bson::DateTime::now(),
        balance: 0.0,
    };

    let result = db::users(&database)
        .insert_one(duplicate)
        .await
        .map_err(DbError::from);

    assert!(matches!(result, Err(DbError::DuplicateKey)), "{result:?}");
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn unique_index_rejects_duplicate_email() {
    let database = fresh_database("expenses_seed_test_unique_email").await;

    seed_database(&database).await.unwrap();

    let duplicate = User {
        id: None,
        username: "juan.perez.segundo".to_string(),
        email: "juan.perez@email.com".to_string(),
        full_name: "Juan Pérez Segundo".to_string(),
        created_at: bson::DateTime::now(),
        balance: 0.0,
    };

    let result = db::users(&database)
        .insert_one(duplicate)
        .await
        .map_err(DbError::from);

    assert!(matches!(result, Err(DbError::DuplicateKey)), "{result:?}");
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn user_expenses_sort_newest_first() {
    let database = fresh_database("expenses_seed_test_sort").await;

    seed_database(&database).await.unwrap();

    let juan = db::users(&database)
        .find_one(doc! { "username": "juan.perez" })
        .await
        .unwrap()
        .expect("seeded user missing");

    let expenses: Vec<Expense> = db::expenses(&database)
        .find(doc! { "userId": juan.id.unwrap() })
        .sort(doc! { "date": -1 })
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    let descriptions: Vec<_> = expenses
        .iter()
        .map(|expense| expense.description.as_str())
        .collect();
    assert_eq!(descriptions, ["Gasolina", "Supermercado para la semana"]);
    assert!(expenses.windows(2).all(|pair| pair[0].date >= pair[1].date));
}
