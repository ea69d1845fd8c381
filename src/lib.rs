//! doctext
//!
//! Upload service that extracts plain text and a word count from PDF, DOCX
//! and TXT documents.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult, ExtractError};
pub use handlers::create_router;
