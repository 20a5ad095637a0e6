//! Core types shared across the pdf2docx workspace.
//!
//! This crate provides the error taxonomy, configuration, conversion record
//! models, and constants used by the storage, processing, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{ConversionRecord, ConversionStatus};
