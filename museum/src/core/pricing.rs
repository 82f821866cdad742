//! Ticket pricing against a static price table.

use crate::core::error::PricingError;
use crate::core::types::{EntrantType, PriceRecord, PriceTable, TicketRequest};

/// Price a single ticket request in cents.
///
/// Validation stops at the first failure, in this order:
/// 1. ticket type is a key of the table (never the reserved `extras`)
/// 2. entrant type is one of `child`, `adult`, `senior`
/// 3. each extra, in request order, is a key of the table's `extras`
///
/// The price is the ticket type's base price for the entrant plus the
/// entrant's price for every requested extra. Repeated extras are charged
/// once per occurrence. A sum that does not fit in `u64` is an error.
pub fn calculate_ticket_price(
    price_table: &PriceTable,
    request: &TicketRequest,
) -> Result<u64, PricingError> {
    let ticket = price_table
        .ticket_types
        .get(&request.ticket_type)
        .ok_or_else(|| PricingError::TicketTypeNotFound(request.ticket_type.clone()))?;
    let entrant: EntrantType = request.entrant_type.parse()?;
    let extras = request
        .extras
        .iter()
        .map(|extra| {
            price_table
                .extras
                .get(extra)
                .ok_or_else(|| PricingError::ExtraTypeNotFound(extra.clone()))
        })
        .collect::<Result<Vec<&PriceRecord>, _>>()?;

    extras
        .iter()
        .map(|record| record.price_in_cents.for_entrant(entrant))
        .try_fold(ticket.price_in_cents.for_entrant(entrant), u64::checked_add)
        .ok_or(PricingError::PriceOverflow)
}
