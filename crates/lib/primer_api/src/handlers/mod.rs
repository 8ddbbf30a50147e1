//! Request handlers.

pub mod basics;
pub mod chat;
pub mod hello;
pub mod items;
