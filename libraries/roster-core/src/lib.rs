//! Roster Core
//!
//! Platform-agnostic domain types, slug generation and error handling for the
//! Roster user service.
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`
//! - **Slugs**: [`slugify`], the URL-safe rendering of a username
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{slugify, CreateUser};
//!
//! let input = CreateUser {
//!     username: "John Doe".to_string(),
//!     firstname: "John".to_string(),
//!     lastname: "Doe".to_string(),
//!     age: 42,
//! };
//!
//! assert_eq!(input.slug(), "john-doe");
//! assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod slug;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use slug::slugify;
pub use types::{CreateUser, UpdateUser, User, UserId};
