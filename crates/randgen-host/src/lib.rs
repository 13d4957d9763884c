//! Randgen widget host — library half of the `randgen-host` binary.

pub mod config;
pub mod error;
pub mod host;
