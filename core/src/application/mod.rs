//! Application layer - Use case services.
//!
//! This module contains application services that wrap domain types for
//! use from several threads.
//!
//! Services are designed to be thin wrappers that:
//! - Accept domain types as inputs
//! - Hold each lock for exactly one domain operation
//! - Return owned data so no guard escapes the call

mod adapter_service;

pub use adapter_service::AdapterService;
