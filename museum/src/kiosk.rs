//! Kiosk facade tying datasets, configuration, and core logic together.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::error::{LookupError, PricingError};
use crate::core::invariants::validate_rooms;
use crate::core::pricing::calculate_ticket_price;
use crate::core::receipt::{ReceiptLayout, purchase_tickets_with_layout};
use crate::core::rooms::{connected_room_names_by_id, room_by_dinosaur_name};
use crate::core::types::{Dinosaur, PriceTable, Room, TicketRequest};
use crate::fixtures;
use crate::io::config::{KioskConfig, load_config};

/// Datasets and receipt layout for one kiosk.
#[derive(Debug, Clone)]
pub struct Kiosk {
    dinosaurs: Vec<Dinosaur>,
    rooms: Vec<Room>,
    price_table: PriceTable,
    layout: ReceiptLayout,
}

impl Kiosk {
    /// Build a kiosk from explicit datasets.
    ///
    /// Room inconsistencies are logged when `config` asks for it; they never
    /// reject the datasets.
    pub fn new(
        dinosaurs: Vec<Dinosaur>,
        rooms: Vec<Room>,
        price_table: PriceTable,
        config: &KioskConfig,
    ) -> Self {
        if config.warn_on_room_inconsistencies {
            for finding in validate_rooms(&rooms) {
                warn!(%finding, "room dataset inconsistency");
            }
        }
        debug!(
            dinosaurs = dinosaurs.len(),
            rooms = rooms.len(),
            ticket_types = price_table.ticket_types.len(),
            extras = price_table.extras.len(),
            "kiosk datasets loaded"
        );
        Self {
            dinosaurs,
            rooms,
            price_table,
            layout: config.receipt.clone(),
        }
    }

    /// Build a kiosk from the bundled datasets.
    pub fn bundled(config: &KioskConfig) -> Result<Self> {
        Ok(Self::new(
            fixtures::dinosaurs()?,
            fixtures::rooms()?,
            fixtures::tickets()?,
            config,
        ))
    }

    /// Build a kiosk from the bundled datasets and a TOML config file.
    ///
    /// A missing config file yields the default configuration.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        let config = load_config(path).context("load kiosk config")?;
        Self::bundled(&config)
    }

    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn price_table(&self) -> &PriceTable {
        &self.price_table
    }

    pub fn room_for_dinosaur(&self, dinosaur_name: &str) -> Result<&str, LookupError> {
        let result = room_by_dinosaur_name(&self.dinosaurs, &self.rooms, dinosaur_name);
        match &result {
            Ok(room) => debug!(dinosaur = dinosaur_name, room, "dinosaur located"),
            Err(err) => debug!(dinosaur = dinosaur_name, %err, "dinosaur lookup failed"),
        }
        result
    }

    pub fn connected_rooms(&self, room_id: &str) -> Result<Vec<&str>, LookupError> {
        let result = connected_room_names_by_id(&self.rooms, room_id);
        match &result {
            Ok(names) => debug!(room_id, connected = names.len(), "connected rooms resolved"),
            Err(LookupError::RoomNotFound(missing)) if missing != room_id => {
                warn!(room_id, dangling = %missing, "room connects to unknown room");
            }
            Err(err) => debug!(room_id, %err, "room lookup failed"),
        }
        result
    }

    pub fn ticket_price(&self, request: &TicketRequest) -> Result<u64, PricingError> {
        let result = calculate_ticket_price(&self.price_table, request);
        match &result {
            Ok(cents) => debug!(
                ticket_type = %request.ticket_type,
                entrant_type = %request.entrant_type,
                extras = request.extras.len(),
                cents,
                "ticket priced"
            ),
            Err(err) => debug!(%err, "ticket rejected"),
        }
        result
    }

    pub fn purchase(&self, purchases: &[TicketRequest]) -> Result<String, PricingError> {
        let result = purchase_tickets_with_layout(&self.price_table, purchases, &self.layout);
        match &result {
            Ok(_) => debug!(tickets = purchases.len(), "receipt rendered"),
            Err(err) => debug!(tickets = purchases.len(), %err, "purchase aborted"),
        }
        result
    }
}
