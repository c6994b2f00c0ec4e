pub mod alert;
pub mod check;
