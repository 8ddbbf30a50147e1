//! Domain services.

pub mod chat;
pub mod items;
