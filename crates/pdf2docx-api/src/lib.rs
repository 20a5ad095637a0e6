//! pdf2docx API Library
//!
//! HTTP handlers, middleware, and application setup for the PDF to Word
//! conversion service. The router is built separately from TCP serving so a
//! host process can embed the same route set (see `setup::routes`); the
//! `pdf2docx-api` binary wires both together.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod history;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use history::ConversionHistory;
pub use state::AppState;
