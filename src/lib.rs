//! PhotoMark Core Library
//!
//! This crate provides the local catalog storage for PhotoMark, a mobile app
//! for tagging photos with user-defined categories and descriptions and
//! browsing them by category. It is designed to be frontend-agnostic: the UI
//! screens call into the store, render whatever it returns, and re-query
//! after any mutation.
//!
//! # Features
//!
//! - `tokio-runtime`: Enable the async [`CatalogStore`] surface (on by default)
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Data structures (Category, CategorizedImage)
//! - `db`: SQLite database layer with DAOs
//! - `store`: Async catalog store consumed by the UI screens
//! - `utils`: Error handling and input validation
//!
//! # Example
//!
//! ```no_run
//! use photomark_core::db::{default_db_path, Database};
//!
//! let db = Database::open(default_db_path()).unwrap();
//! db.init().unwrap();
//!
//! let id = db.insert_category("Sunsets").unwrap();
//! assert!(id > 0);
//! ```

pub mod db;
pub mod models;
#[cfg(feature = "tokio-runtime")]
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use db::{default_db_path, CatalogStats, Database};
pub use models::{Category, CategorizedImage, CategoryImage, CreateCategorizedImage};
#[cfg(feature = "tokio-runtime")]
pub use store::CatalogStore;
pub use utils::{AppError, AppResult, CommandError};
