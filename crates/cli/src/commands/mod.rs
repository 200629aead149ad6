pub mod accounts;
pub mod send;
