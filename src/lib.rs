//! Library catalog and borrowing
//!
//! An in-memory catalog of heterogeneous library items (books, discs,
//! periodicals) with a borrow/return state machine on the lendable kinds,
//! per-kind late fees, and a caller-owned borrow history.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Services;
