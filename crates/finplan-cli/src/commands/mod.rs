pub mod bonds;
pub mod catalog;
pub mod loans;
pub mod savings;
