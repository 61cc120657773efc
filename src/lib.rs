// src/lib.rs

//! CDR Deduplication Library

pub mod checker;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod stream;
pub mod utils;
