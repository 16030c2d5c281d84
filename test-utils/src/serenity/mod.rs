//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::Permissions;
//! use test_utils::serenity::role::create_test_role;
//!
//! let admin_role = create_test_role(111111111, "Admin", Permissions::ADMINISTRATOR);
//! let member_role = create_test_role(222222222, "Member", Permissions::empty());
//! ```

pub mod role;

pub use role::create_test_role;
