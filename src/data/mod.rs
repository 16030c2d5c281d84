//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table the bot owns. Repositories use SeaORM entity models internally and return domain
//! models to keep `i64` columns and entity types out of the service layer. Every query the
//! bot issues goes through these repositories.

pub mod message_count;
pub mod permitted_channel;
pub mod registration;

#[cfg(test)]
mod test;
