//! Shared data model for the museum kiosk.
//!
//! These types mirror the static datasets handed to the kiosk. They are never
//! mutated by core logic; every operation borrows them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::PricingError;

/// A dinosaur on the museum roster.
///
/// Only `dinosaur_id` and `name` drive lookups; the remaining descriptive
/// fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub dinosaur_id: String,
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// An exhibit room.
///
/// `connects_to` is expected to reference existing room ids, but datasets do
/// not always uphold that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: String,
    pub name: String,
    pub dinosaurs: Vec<String>,
    pub connects_to: Vec<String>,
}

/// Visitor category that selects the price tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrantType {
    Child,
    Adult,
    Senior,
}

impl EntrantType {
    pub const ALL: [EntrantType; 3] = [EntrantType::Child, EntrantType::Adult, EntrantType::Senior];

    pub fn as_str(self) -> &'static str {
        match self {
            EntrantType::Child => "child",
            EntrantType::Adult => "adult",
            EntrantType::Senior => "senior",
        }
    }
}

impl fmt::Display for EntrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntrantType {
    type Err = PricingError;

    /// Exact, case-sensitive match against the closed set.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EntrantType::ALL
            .into_iter()
            .find(|entrant| entrant.as_str() == value)
            .ok_or_else(|| PricingError::EntrantTypeNotFound(value.to_string()))
    }
}

/// Per-entrant prices in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInCents {
    pub child: u64,
    pub adult: u64,
    pub senior: u64,
}

impl PriceInCents {
    pub fn for_entrant(&self, entrant: EntrantType) -> u64 {
        match entrant {
            EntrantType::Child => self.child,
            EntrantType::Adult => self.adult,
            EntrantType::Senior => self.senior,
        }
    }
}

/// Priced item: either an admission ticket type or an extra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_in_cents: PriceInCents,
}

/// Ticket price table.
///
/// On the wire this is one object: every key is a ticket type except the
/// reserved `extras` key, which maps extra names to their own records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub extras: BTreeMap<String, PriceRecord>,
    #[serde(flatten)]
    pub ticket_types: BTreeMap<String, PriceRecord>,
}

/// A single ticket being priced or purchased.
///
/// `entrant_type` stays a raw string so unknown values can be reported as
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub ticket_type: String,
    pub entrant_type: String,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketRequest {
    pub fn new<I, S>(ticket_type: &str, entrant_type: &str, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ticket_type: ticket_type.to_string(),
            entrant_type: entrant_type.to_string(),
            extras: extras.into_iter().map(Into::into).collect(),
        }
    }
}
