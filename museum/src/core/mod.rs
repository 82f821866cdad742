//! Deterministic, pure logic for kiosk lookups and pricing.
//!
//! Core modules must be free of I/O side effects. They borrow the static
//! datasets and return deterministic outputs suitable for tests.

pub mod error;
pub mod invariants;
pub mod pricing;
pub mod receipt;
pub mod rooms;
pub mod text;
pub mod types;
