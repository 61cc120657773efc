// src/models/mod.rs

//! Domain models for the deduplication tool.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod document;
mod stats;

// Re-export all public types
pub use config::{Config, DedupeConfig, KeyMode, RedisConfig};
pub use document::Document;
pub use stats::DedupeStats;
