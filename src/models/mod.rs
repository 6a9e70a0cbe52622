pub mod budget;
pub mod chat;
