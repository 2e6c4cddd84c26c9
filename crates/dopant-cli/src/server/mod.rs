//! HTTP API and structure viewer.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
