/*! This module defines the error type and collection-level operations for the
demo database: typed collection handles, explicit collection creation, and the
index definitions the demo's queries rely on. */

use bson::doc;
use mongodb::{
    Collection, Database, IndexModel,
    error::{Error, ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::models::{Category, Expense, User};

/// The name of the database the seeder populates.
pub const DATABASE_NAME: &str = "expenses_demo";

/// The collection holding [`User`] documents.
pub const USERS: &str = "users";
/// The collection holding [`Category`] documents.
pub const CATEGORIES: &str = "categories";
/// The collection holding [`Expense`] documents.
pub const EXPENSES: &str = "expenses";

// MongoDB server code for a write rejected by a unique index.
const DUPLICATE_KEY_CODE: i32 = 11000;

// MongoDB server code for creating a collection that already exists.
const NAMESPACE_EXISTS_CODE: i32 = 48;

/// Errors originating from operations on the demo database.
#[derive(thiserror::Error, Debug)]
pub enum DbError {
    /// A unique index rejected a write. Re-running the seeder against an
    /// already-seeded database hits this on the `users.username` index.
    #[error("a unique index rejected the write")]
    DuplicateKey,
    /// Wrapper for driver errors not handled by the other enum entries.
    #[error("database error: {0}")]
    Mongo(Error),
}

impl From<Error> for DbError {
    fn from(error: Error) -> Self {
        if is_duplicate_key(&error) {
            DbError::DuplicateKey
        } else {
            DbError::Mongo(error)
        }
    }
}

/// Whether the server rejected a write because of a unique index violation,
/// for both single-document and bulk inserts.
fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::InsertMany(insert_error) => insert_error
            .write_errors
            .iter()
            .flatten()
            .any(|write_error| write_error.code == DUPLICATE_KEY_CODE),
        _ => false,
    }
}

/// The `users` collection of `db`.
pub fn users(db: &Database) -> Collection<User> {
    db.collection(USERS)
}

/// The `categories` collection of `db`.
pub fn categories(db: &Database) -> Collection<Category> {
    db.collection(CATEGORIES)
}

/// The `expenses` collection of `db`.
pub fn expenses(db: &Database) -> Collection<Expense> {
    db.collection(EXPENSES)
}

/// Explicitly create the three collections.
///
/// MongoDB would create them implicitly on first insert; creating them up
/// front keeps the pass's shape explicit. A collection that already exists is
/// left as it is, so a re-run gets as far as the inserts and fails there on
/// the unique indexes instead.
///
/// # Errors
/// Returns an error if the server rejects a create for any reason other than
/// the collection already existing.
pub async fn create_collections(db: &Database) -> Result<(), DbError> {
    for name in [USERS, CATEGORIES, EXPENSES] {
        match db.create_collection(name).await {
            Err(error) if is_namespace_exists(&error) => {}
            result => result?,
        }
    }

    Ok(())
}

fn is_namespace_exists(error: &Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Command(command_error) if command_error.code == NAMESPACE_EXISTS_CODE
    )
}

/// Create the demo's five indexes.
///
/// Two unique indexes keep `users.username` and `users.email` distinct. Three
/// lookup indexes on `expenses` serve the demo's common queries: a user's
/// expenses newest first (`userId` ascending, `date` descending), filtering
/// by payment method, and filtering by category.
///
/// # Errors
/// Returns an error if index creation fails, for example when existing data
/// already violates one of the unique constraints.
pub async fn create_indexes(db: &Database) -> Result<(), DbError> {
    let unique = IndexOptions::builder().unique(true).build();

    users(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(unique.clone())
                .build(),
        )
        .await?;
    users(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique)
                .build(),
        )
        .await?;

    expenses(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "userId": 1, "date": -1 })
                .build(),
        )
        .await?;
    expenses(db)
        .create_index(IndexModel::builder().keys(doc! { "paymentMethod": 1 }).build())
        .await?;
    expenses(db)
        .create_index(IndexModel::builder().keys(doc! { "categoryId": 1 }).build())
        .await?;

    Ok(())
}
