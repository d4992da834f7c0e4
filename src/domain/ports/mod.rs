pub mod account_repository;
pub mod conversation_repository;
pub mod inbox_repository;
pub mod label_repository;
