//! Networking modules for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the upload and fallback fetch, `error` classifies their
//! failures, and `types` defines the response schema.

pub mod api;
pub mod error;
pub mod types;
