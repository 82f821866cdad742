//! I/O helpers for the kiosk.

pub mod config;
