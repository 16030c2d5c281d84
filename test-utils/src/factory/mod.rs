//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting rows with sensible defaults,
//! reducing boilerplate in tests. Each table has its own factory module with a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let registration = factory::create_registration(&db).await?;
//! let count = factory::message_count::MessageCountFactory::new(&db, guild_id)
//!     .counted(12)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod message_count;
pub mod permitted_channel;
pub mod registration;

pub use message_count::create_message_count;
pub use permitted_channel::create_permitted_channel;
pub use registration::create_registration;
