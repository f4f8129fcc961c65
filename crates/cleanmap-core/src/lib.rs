//! Cleanmap Core - Domain models, errors, and configuration
//!
//! This crate holds the value types shared by the proximity utilities and
//! their consumers: coordinates, distances, polluted-location records, and the
//! layered configuration.

pub mod config;
pub mod error;
pub mod models;

pub use error::{CleanmapError, Result};
