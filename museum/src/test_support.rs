//! Test-only helpers for constructing kiosk datasets.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Map;
use tempfile::TempDir;

use crate::core::types::{Dinosaur, PriceInCents, PriceRecord, PriceTable, Room, TicketRequest};

/// Create a dinosaur with no descriptive fields.
pub fn dinosaur(id: &str, name: &str) -> Dinosaur {
    Dinosaur {
        dinosaur_id: id.to_string(),
        name: name.to_string(),
        details: Map::new(),
    }
}

/// Create a room listing `dinosaurs` and connecting to `connects_to`.
pub fn room(id: &str, name: &str, dinosaurs: &[&str], connects_to: &[&str]) -> Room {
    Room {
        room_id: id.to_string(),
        name: name.to_string(),
        dinosaurs: dinosaurs.iter().map(|id| id.to_string()).collect(),
        connects_to: connects_to.iter().map(|id| id.to_string()).collect(),
    }
}

/// Create a price record with `(child, adult, senior)` cents.
pub fn price(child: u64, adult: u64, senior: u64) -> PriceRecord {
    PriceRecord {
        description: None,
        price_in_cents: PriceInCents {
            child,
            adult,
            senior,
        },
    }
}

/// Create a price table from `(name, record)` pairs.
pub fn price_table(
    ticket_types: Vec<(&str, PriceRecord)>,
    extras: Vec<(&str, PriceRecord)>,
) -> PriceTable {
    PriceTable {
        extras: named(extras),
        ticket_types: named(ticket_types),
    }
}

fn named(pairs: Vec<(&str, PriceRecord)>) -> BTreeMap<String, PriceRecord> {
    pairs
        .into_iter()
        .map(|(name, record)| (name.to_string(), record))
        .collect()
}

/// Small table with distinct prices per tier, convenient for arithmetic checks.
pub fn sample_price_table() -> PriceTable {
    price_table(
        vec![("general", price(2000, 3000, 2500)), ("vip", price(5000, 7000, 6000))],
        vec![("movie", price(1000, 1000, 1000)), ("terrace", price(500, 1000, 750))],
    )
}

/// Shorthand for a ticket request.
pub fn ticket(ticket_type: &str, entrant_type: &str, extras: &[&str]) -> TicketRequest {
    TicketRequest::new(ticket_type, entrant_type, extras.iter().copied())
}

/// Write `contents` to `config.toml` inside a fresh temp dir.
///
/// The returned `TempDir` must outlive any use of the path.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (temp, path)
}

/// Run `f` with a thread-local subscriber and return everything logged at
/// `warn` and above, without ANSI colors.
pub fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || SharedWriter(Arc::clone(&writer)))
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.lock().expect("log buffer").clone();
    String::from_utf8(bytes).expect("utf8 logs")
}

struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
