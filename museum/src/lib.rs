//! Lookup and pricing utilities for the Dinosaur Museum information kiosk.
//!
//! The crate answers two kinds of questions over small static datasets:
//!
//! - **Rooms**: which room exhibits a dinosaur, and which rooms lead into a
//!   given room.
//! - **Tickets**: what a ticket costs, and what the receipt for a batch of
//!   tickets looks like.
//!
//! - **[`core`]**: Pure, deterministic logic. No I/O, fully testable in isolation.
//! - **[`io`]**: Configuration files.
//!
//! [`kiosk::Kiosk`] combines the bundled [`fixtures`], configuration, and core
//! logic, and emits `tracing` events for each operation.

pub mod core;
pub mod fixtures;
pub mod io;
pub mod kiosk;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::error::{LookupError, PricingError};
pub use crate::core::pricing::calculate_ticket_price;
pub use crate::core::receipt::{ReceiptLayout, purchase_tickets, purchase_tickets_with_layout};
pub use crate::core::rooms::{connected_room_names_by_id, room_by_dinosaur_name};
pub use crate::core::types::{
    Dinosaur, EntrantType, PriceInCents, PriceRecord, PriceTable, Room, TicketRequest,
};
pub use crate::kiosk::Kiosk;
