pub mod auth_page;
pub mod create_expense;
pub mod dashboard;
pub mod expense_table;
pub mod header;
pub mod summary;
