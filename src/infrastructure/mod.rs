// src/infrastructure/mod.rs
pub mod di;
pub mod error;
pub mod http;
pub mod notification;
