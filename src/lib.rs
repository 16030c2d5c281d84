//! Discord bot that keeps nickname and external id registrations, ranks members by
//! activity in allow-listed channels and offers staff tools to manage both.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
