/*! The seeding pass: the literal sample data and the linear sequence of
create/insert/index operations that populates the demo database. */

use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use time::{Date, macros::date};

use crate::{
    db::{self, DbError},
    models::{Category, Expense, ExpenseStatus, PaymentMethod, User},
};

/// Document counts per collection after a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Documents in the `users` collection.
    pub users: u64,
    /// Documents in the `categories` collection.
    pub categories: u64,
    /// Documents in the `expenses` collection.
    pub expenses: u64,
}

/// An expense sample keyed by the natural keys of its user and category.
///
/// The object references are resolved by looking the documents up at insert
/// time rather than by holding on to the freshly generated ids. A miss leaves
/// the reference null instead of failing the pass.
struct ExpenseSeed {
    username: &'static str,
    category: &'static str,
    amount: f64,
    description: &'static str,
    payment_method: PaymentMethod,
    date: Date,
    status: ExpenseStatus,
}

fn sample_users() -> Vec<User> {
    let created_at = DateTime::now();

    vec![
        User {
            id: Some(ObjectId::new()),
            username: "juan.perez".to_string(),
            email: "juan.perez@email.com".to_string(),
            full_name: "Juan Pérez".to_string(),
            created_at,
            balance: 5000.00,
        },
        User {
            id: Some(ObjectId::new()),
            username: "maria.garcia".to_string(),
            email: "maria.garcia@email.com".to_string(),
            full_name: "María García".to_string(),
            created_at,
            balance: 3500.00,
        },
        User {
            id: Some(ObjectId::new()),
            username: "carlos.lopez".to_string(),
            email: "carlos.lopez@email.com".to_string(),
            full_name: "Carlos López".to_string(),
            created_at,
            balance: 8000.00,
        },
    ]
}

fn sample_categories() -> Vec<Category> {
    [
        ("Alimentación", "Gastos en comida y bebidas", "#FF6B6B"),
        ("Transporte", "Gasolina, transporte público, taxi", "#4ECDC4"),
        ("Entretenimiento", "Cine, restaurantes, eventos", "#45B7D1"),
        ("Servicios", "Luz, agua, internet, teléfono", "#96CEB4"),
        ("Salud", "Medicinas, consultas médicas", "#FFEAA7"),
    ]
    .into_iter()
    .map(|(name, description, color)| Category {
        id: Some(ObjectId::new()),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    })
    .collect()
}

fn sample_expenses() -> Vec<ExpenseSeed> {
    vec![
        ExpenseSeed {
            username: "juan.perez",
            category: "Alimentación",
            amount: 45.50,
            description: "Supermercado para la semana",
            payment_method: PaymentMethod::Cash,
            date: date!(2024 - 01 - 15),
            status: ExpenseStatus::Completed,
        },
        ExpenseSeed {
            username: "juan.perez",
            category: "Transporte",
            amount: 25.00,
            description: "Gasolina",
            payment_method: PaymentMethod::DebitCard,
            date: date!(2024 - 01 - 16),
            status: ExpenseStatus::Completed,
        },
        ExpenseSeed {
            username: "maria.garcia",
            category: "Entretenimiento",
            amount: 120.00,
            description: "Cena en restaurante",
            payment_method: PaymentMethod::CreditCard,
            date: date!(2024 - 01 - 17),
            status: ExpenseStatus::Completed,
        },
    ]
}

/// Populate `db` with the demo's sample data and indexes.
///
/// The pass is strictly linear: create the three collections, insert the
/// users, the categories, and then the expenses (resolving each expense's
/// user and category by username and category name), create the indexes, and
/// count what landed. The first driver error aborts the run; there is no
/// rollback of the steps that already completed.
///
/// # Errors
/// Returns [`DbError::DuplicateKey`] when run against a database that already
/// contains the sample users, and [`DbError::Mongo`] for any other driver
/// error.
pub async fn seed_database(db: &Database) -> Result<SeedSummary, DbError> {
    db::create_collections(db).await?;

    let users = sample_users();
    tracing::info!("Inserting {} users", users.len());
    db::users(db).insert_many(users).await?;

    let categories = sample_categories();
    tracing::info!("Inserting {} categories", categories.len());
    db::categories(db).insert_many(categories).await?;

    let seeds = sample_expenses();
    tracing::info!("Inserting {} expenses", seeds.len());
    for seed in seeds {
        let expense = resolve_expense(db, seed).await?;
        db::expenses(db).insert_one(expense).await?;
    }

    tracing::info!("Creating indexes");
    db::create_indexes(db).await?;

    Ok(SeedSummary {
        users: db::users(db).count_documents(doc! {}).await?,
        categories: db::categories(db).count_documents(doc! {}).await?,
        expenses: db::expenses(db).count_documents(doc! {}).await?,
    })
}

/// Build the [`Expense`] document for `seed`, resolving its user and category
/// references by natural key.
async fn resolve_expense(db: &Database, seed: ExpenseSeed) -> Result<Expense, DbError> {
    let user = db::users(db)
        .find_one(doc! { "username": seed.username })
        .await?;

    if user.is_none() {
        tracing::warn!(
            username = seed.username,
            "no user matched, inserting expense with a null user reference"
        );
    }

    let category = db::categories(db)
        .find_one(doc! { "name": seed.category })
        .await?;

    if category.is_none() {
        tracing::warn!(
            category = seed.category,
            "no category matched, inserting expense with a null category reference"
        );
    }

    Ok(Expense {
        id: Some(ObjectId::new()),
        user_id: user.and_then(|user| user.id),
        category_id: category.and_then(|category| category.id),
        amount: seed.amount,
        description: seed.description.to_string(),
        payment_method: seed.payment_method,
        date: midnight_utc(seed.date),
        created_at: DateTime::now(),
        status: seed.status,
    })
}

// Matches `new Date('YYYY-MM-DD')` in the mongo shell, which lands on
// midnight UTC of the given day.
fn midnight_utc(date: Date) -> DateTime {
    DateTime::from_time_0_3(date.midnight().assume_utc())
}
