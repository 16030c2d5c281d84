//! Registro Bot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! registration bot. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and the bot's table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Insert rows with sensible defaults
//! - **serenity**: Build Serenity API objects from JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Registration;
//!
//! #[tokio::test]
//! async fn test_registration_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Registration)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
