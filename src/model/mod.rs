//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, so the
//! service and bot layers never see raw `i64` columns. Discord ids are plain `u64`
//! snowflakes everywhere above the data layer.

pub mod message_count;
pub mod pagination;
pub mod permitted_channel;
pub mod registration;
