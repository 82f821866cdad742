//! Receipt rendering for a batch of ticket purchases.

use serde::{Deserialize, Serialize};

use crate::core::error::PricingError;
use crate::core::pricing::calculate_ticket_price;
use crate::core::text::{capitalize, format_dollars};
use crate::core::types::{PriceTable, TicketRequest};

pub const DEFAULT_HEADER: &str = "Thank you for visiting the Dinosaur Museum!";
pub const DEFAULT_SEPARATOR: &str = "-------------------------------------------";

/// Fixed text framing the ticket lines of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptLayout {
    pub header: String,
    pub separator: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Price every purchase and render the receipt with the default layout.
pub fn purchase_tickets(
    price_table: &PriceTable,
    purchases: &[TicketRequest],
) -> Result<String, PricingError> {
    purchase_tickets_with_layout(price_table, purchases, &ReceiptLayout::default())
}

/// Price every purchase in order and render the receipt.
///
/// The first purchase that fails to price aborts the batch, as does a batch
/// total that overflows; no partial receipt is produced. Layout:
///
/// ```text
/// <header>
/// <separator>
/// <one line per ticket>
/// <separator>
/// TOTAL: $<d.dd>
/// ```
pub fn purchase_tickets_with_layout(
    price_table: &PriceTable,
    purchases: &[TicketRequest],
    layout: &ReceiptLayout,
) -> Result<String, PricingError> {
    let mut total_cents: u64 = 0;
    let mut lines = Vec::with_capacity(purchases.len());

    for purchase in purchases {
        let price = calculate_ticket_price(price_table, purchase)?;
        total_cents = total_cents
            .checked_add(price)
            .ok_or(PricingError::PriceOverflow)?;
        lines.push(ticket_line(purchase, price));
    }

    Ok(format!(
        "{header}\n{sep}\n{lines}\n{sep}\nTOTAL: ${total}",
        header = layout.header,
        sep = layout.separator,
        lines = lines.join("\n"),
        total = format_dollars(total_cents),
    ))
}

/// `Adult General Admission: $50.00 (Movie Access, Terrace Access)`
fn ticket_line(purchase: &TicketRequest, price_cents: u64) -> String {
    let mut line = format!(
        "{} {} Admission: ${}",
        capitalize(&purchase.entrant_type),
        capitalize(&purchase.ticket_type),
        format_dollars(price_cents)
    );
    if !purchase.extras.is_empty() {
        let extras = purchase
            .extras
            .iter()
            .map(|extra| format!("{} Access", capitalize(extra)))
            .collect::<Vec<_>>();
        line.push_str(&format!(" ({})", extras.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{price, price_table, sample_price_table, ticket};

    #[test]
    fn renders_lines_in_purchase_order() {
        let table = sample_price_table();
        let receipt = purchase_tickets(
            &table,
            &[
                ticket("vip", "adult", &[]),
                ticket("general", "senior", &["movie", "terrace"]),
            ],
        )
        .expect("receipt");

        assert_eq!(
            receipt,
            "Thank you for visiting the Dinosaur Museum!\n\
             -------------------------------------------\n\
             Adult Vip Admission: $70.00\n\
             Senior General Admission: $42.50 (Movie Access, Terrace Access)\n\
             -------------------------------------------\n\
             TOTAL: $112.50"
        );
    }

    #[test]
    fn empty_batch_has_zero_total() {
        let table = sample_price_table();
        let receipt = purchase_tickets(&table, &[]).expect("receipt");
        assert_eq!(
            receipt,
            format!("{DEFAULT_HEADER}\n{DEFAULT_SEPARATOR}\n\n{DEFAULT_SEPARATOR}\nTOTAL: $0.00")
        );
    }

    #[test]
    fn first_failure_aborts_batch() {
        let table = sample_price_table();
        let result = purchase_tickets(
            &table,
            &[
                ticket("general", "adult", &[]),
                ticket("general", "toddler", &[]),
                ticket("discount", "adult", &[]),
            ],
        );
        assert_eq!(
            result,
            Err(PricingError::EntrantTypeNotFound("toddler".to_string()))
        );
    }

    #[test]
    fn overflowing_batch_total_is_an_error() {
        let half = u64::MAX / 2 + 1;
        let table = price_table(vec![("general", price(half, 1, 1))], Vec::new());
        let one = ticket("general", "child", &[]);
        assert!(purchase_tickets(&table, std::slice::from_ref(&one)).is_ok());
        assert_eq!(
            purchase_tickets(&table, &[one.clone(), one]),
            Err(PricingError::PriceOverflow)
        );
    }

    #[test]
    fn custom_layout_replaces_frame_text() {
        let table = sample_price_table();
        let layout = ReceiptLayout {
            header: "Welcome back!".to_string(),
            separator: "===".to_string(),
        };
        let receipt =
            purchase_tickets_with_layout(&table, &[ticket("general", "child", &[])], &layout)
                .expect("receipt");
        assert_eq!(
            receipt,
            "Welcome back!\n===\nChild General Admission: $20.00\n===\nTOTAL: $20.00"
        );
    }

    #[test]
    fn multi_word_names_are_capitalized_per_word() {
        let mut table = sample_price_table();
        let vip = table.ticket_types["vip"].clone();
        table.ticket_types.insert("late night".to_string(), vip);
        let receipt =
            purchase_tickets(&table, &[ticket("late night", "adult", &["movie"])]).expect("receipt");
        assert!(receipt.contains("Adult Late Night Admission: $80.00 (Movie Access)\n"));
    }
}
