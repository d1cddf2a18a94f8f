//! Services Layer
//!
//! Pure business logic, kept free of HTTP types so the Axum handlers
//! stay a thin translation layer.

pub mod sale_service;
