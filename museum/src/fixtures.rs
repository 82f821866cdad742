//! Bundled museum datasets.
//!
//! The kiosk ships with the museum's current roster, floor plan, and price
//! list embedded at compile time. Callers with their own data construct the
//! core types directly.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::core::types::{Dinosaur, PriceTable, Room};

const DINOSAURS_JSON: &str = include_str!("../fixtures/dinosaurs.json");
const ROOMS_JSON: &str = include_str!("../fixtures/rooms.json");
const TICKETS_JSON: &str = include_str!("../fixtures/tickets.json");

pub fn dinosaurs() -> Result<Vec<Dinosaur>> {
    parse(DINOSAURS_JSON, "dinosaurs")
}

pub fn rooms() -> Result<Vec<Room>> {
    parse(ROOMS_JSON, "rooms")
}

pub fn tickets() -> Result<PriceTable> {
    parse(TICKETS_JSON, "tickets")
}

fn parse<T: DeserializeOwned>(raw: &str, name: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("parse bundled {name} fixture"))
}
