//! Seeds the `expenses_demo` MongoDB database with sample data for the
//! expense-tracking demo: three users, five expense categories, three
//! expenses, and the indexes the demo's queries rely on.
//!
//! The whole crate is a single linear pass with no recovery logic; see
//! [`seed_database`]. Re-running it against an already-seeded database fails
//! with [`DbError::DuplicateKey`] on the unique `users.username` index.

#![warn(missing_docs)]

pub mod db;
pub mod models;
mod seed;

pub use db::{DATABASE_NAME, DbError};
pub use seed::{SeedSummary, seed_database};
