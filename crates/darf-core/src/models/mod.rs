//! Data models: configuration and extracted DARF records.

pub mod config;
pub mod darf;
