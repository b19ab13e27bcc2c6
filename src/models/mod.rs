//! The document types stored in the demo database.

mod category;
mod expense;
mod user;

pub use category::Category;
pub use expense::{Expense, ExpenseStatus, PaymentMethod};
pub use user::User;
