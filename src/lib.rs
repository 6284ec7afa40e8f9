mod error;

pub use error::{AppError, Result};

pub mod cache;
pub mod config;
pub mod converter;
pub mod models;
pub mod rates;
pub mod routes;
pub mod symbols;
