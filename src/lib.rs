//! Shared game vocabulary and translation tables for Chili and Cilantro.
//!
//! - `enumerations`: game enums that travel over the wire and need labels
//! - `i18n`: string tables, nested-key builder, string and enum translation
//! - `config`: environment configuration for the bundled binaries

pub mod config;
pub mod enumerations;
pub mod i18n;
