use std::collections::VecDeque;
use log::debug;

use crate::core::{CreditError, InventoryLot, Result};

/// Open lots of one security, oldest first.
///
/// Sells are matched strictly first-in-first-out. A sell larger than the
/// shares on hand is rejected before any lot is touched, so a rejected sell
/// leaves the queue exactly as it was.
#[derive(Debug, Clone)]
pub struct CompanyLedger {
    company: String,
    lots: VecDeque<InventoryLot>,
}

impl CompanyLedger {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            lots: VecDeque::new(),
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn buy(&mut self, quantity: u64, unit_cost: f64) {
        if quantity == 0 {
            return;
        }
        self.lots.push_back(InventoryLot::new(quantity, unit_cost));
    }

    /// Shares currently held across all open lots.
    ///
    /// Saturates at `u64::MAX`; a saturated total still covers any single sell.
    pub fn available(&self) -> u64 {
        total_quantity(self.lots.iter())
    }

    /// Consume shares from the oldest lots first
    ///
    /// # Arguments
    /// * `quantity` - Number of shares sold
    ///
    /// # Returns
    /// * `Ok(cost_basis)` - Acquisition cost of the consumed shares
    /// * `Err(CreditError::InsufficientInventory)` - Fewer shares held than sold; no lot is touched
    pub fn sell(&mut self, quantity: u64) -> Result<f64> {
        // Check the whole quantity up front so a rejection never mutates the queue
        let available = self.available();
        if quantity > available {
            return Err(CreditError::InsufficientInventory {
                company: self.company.clone(),
                requested: quantity,
                available,
            });
        }

        let mut remaining = quantity;
        let mut cost_basis = 0.0;

        // Match against the oldest lot until the sell is covered
        while remaining > 0 {
            let lot = match self.lots.front_mut() {
                Some(lot) => lot,
                None => break,
            };

            let used = remaining.min(lot.quantity);
            cost_basis += used as f64 * lot.unit_cost;
            lot.quantity -= used;
            remaining -= used;
            debug!(
                "{}: matched {} @ {:.2}, {} left in lot",
                self.company, used, lot.unit_cost, lot.quantity
            );

            // Remove the lot once it is fully consumed
            if lot.quantity == 0 {
                self.lots.pop_front();
            }
        }

        Ok(cost_basis)
    }

    pub fn open_lots(&self) -> Vec<InventoryLot> {
        self.lots.iter().copied().collect()
    }
}

/// Sum lot quantities, saturating instead of overflowing.
pub fn total_quantity<'a>(lots: impl Iterator<Item = &'a InventoryLot>) -> u64 {
    lots.fold(0u64, |acc, lot| acc.saturating_add(lot.quantity))
}
