// src/application/mod.rs
pub mod error;
pub mod services;
