//! Domain errors returned by kiosk lookups and pricing.
//!
//! The display text of every variant is part of the public contract: kiosk
//! screens show these messages verbatim.

use thiserror::Error;

/// Failure to resolve a dinosaur or room.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Dinosaur with name '{0}' cannot be found.")]
    DinosaurNotFound(String),
    #[error("Dinosaur with name '{0}' cannot be found in any rooms.")]
    DinosaurNotInAnyRoom(String),
    /// Unknown room id, either the queried one or a dangling connection.
    #[error("Room with ID of '{0}' could not be found.")]
    RoomNotFound(String),
}

/// Failure to price a ticket request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Ticket type '{0}' cannot be found.")]
    TicketTypeNotFound(String),
    #[error("Entrant type '{0}' cannot be found.")]
    EntrantTypeNotFound(String),
    #[error("Extra type '{0}' cannot be found.")]
    ExtraTypeNotFound(String),
    /// Summed cents do not fit in a `u64`.
    #[error("Price total exceeds the supported range.")]
    PriceOverflow,
}
