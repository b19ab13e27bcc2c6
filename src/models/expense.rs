use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Paid in cash.
    Cash,
    /// Paid by credit card.
    CreditCard,
    /// Paid by debit card.
    DebitCard,
}

/// The lifecycle state of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    /// Recorded but not yet settled.
    Pending,
    /// Settled.
    Completed,
    /// Voided before settling.
    Cancelled,
}

/// A single expense belonging to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// System-generated identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// The owning user. `None` when the seed-time lookup found no match, in
    /// which case the document carries a null reference.
    pub user_id: Option<ObjectId>,
    /// The expense's category. `None` when the seed-time lookup found no
    /// match.
    pub category_id: Option<ObjectId>,
    /// Amount spent.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// How the expense was paid.
    pub payment_method: PaymentMethod,
    /// The day the transaction took place, stored as midnight UTC.
    pub date: DateTime,
    /// When the record was created.
    pub created_at: DateTime,
    /// Lifecycle state.
    pub status: ExpenseStatus,
}
