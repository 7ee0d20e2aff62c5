use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status carried by every retained transaction.
pub const STATUS_SUCCESSFUL: &str = "Successful";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Map the single-letter side marker used in broker logs.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "B" => Some(Side::Buy),
            "S" => Some(Side::Sell),
            _ => None,
        }
    }
}

/// A filled order recovered from the broker log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date token exactly as it appeared in the log (`DD Mon YYYY HH:MM`).
    pub date: String,
    pub datetime: NaiveDateTime,
    pub side: Side,
    pub company: String,
    /// Amount printed after the `Delivery ₹` marker. Not used for profit.
    pub price: f64,
    pub qty: u64,
    /// Per-unit execution price.
    pub rate: f64,
    pub status: String,
}

impl Transaction {
    pub fn new(
        date: String,
        datetime: NaiveDateTime,
        side: Side,
        company: String,
        price: f64,
        qty: u64,
        rate: f64,
    ) -> Self {
        Self {
            date,
            datetime,
            side,
            company,
            price,
            qty,
            rate,
            status: STATUS_SUCCESSFUL.to_string(),
        }
    }
}

/// Unsold shares bought at one price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryLot {
    pub quantity: u64,
    pub unit_cost: f64,
}

impl InventoryLot {
    pub fn new(quantity: u64, unit_cost: f64) -> Self {
        Self { quantity, unit_cost }
    }
}
