use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A user of the expense-tracking demo.
///
/// The `username` and `email` fields are kept unique by indexes on the
/// `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// System-generated identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// When the record was created.
    pub created_at: DateTime,
    /// Current account balance.
    pub balance: f64,
}
