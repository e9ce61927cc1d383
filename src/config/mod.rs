// src/config/mod.rs
mod args;
mod models;

pub use args::{normalize_args, Args};
pub use models::*;
