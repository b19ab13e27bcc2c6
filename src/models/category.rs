use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An expense category, referenced by [`Expense::category_id`].
///
/// [`Expense::category_id`]: crate::models::Expense::category_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// System-generated identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Category name, the natural key expenses are linked by.
    pub name: String,
    /// Short description of what falls under the category.
    pub description: String,
    /// Display color as a `#RRGGBB` hex code.
    pub color: String,
}
