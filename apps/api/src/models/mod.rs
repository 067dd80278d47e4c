pub mod catalog;
pub mod chat;
pub mod domain;
pub mod resume;
