//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and the upstream
//! rental-data provider.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations and SQL templates
//! - [`rental`] - Rental-data provider HTTP client

pub mod persistence;
pub mod rental;
