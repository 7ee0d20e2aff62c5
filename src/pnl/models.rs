use serde::Serialize;

use crate::core::InventoryLot;
use crate::pnl::charges::ChargeBreakdown;
use crate::pnl::fifo::total_quantity;

/// A sell matched in full against earlier buys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellOutcome {
    pub date: String,
    pub qty: u64,
    pub rate: f64,
    pub cost_basis: f64,
    pub gross_profit: f64,
    pub charges: ChargeBreakdown,
    pub net_profit: f64,
    /// Net profit floored at zero
    pub credited: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    Buy { date: String, qty: u64, rate: f64 },
    Sell(SellOutcome),
    Rejected { date: String, qty: u64, available: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySection {
    pub company: String,
    pub entries: Vec<LedgerEntry>,
    /// Lots still held after the last transaction.
    pub open_lots: Vec<InventoryLot>,
}

impl CompanySection {
    pub fn buys(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, LedgerEntry::Buy { .. }))
            .count()
    }

    pub fn sells(&self) -> impl Iterator<Item = &SellOutcome> {
        self.entries.iter().filter_map(|e| match e {
            LedgerEntry::Sell(outcome) => Some(outcome),
            _ => None,
        })
    }

    pub fn rejected(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, LedgerEntry::Rejected { .. }))
            .count()
    }

    pub fn gross_profit(&self) -> f64 {
        self.sells().map(|s| s.gross_profit).sum()
    }

    pub fn total_charges(&self) -> f64 {
        self.sells().map(|s| s.charges.total).sum()
    }

    /// Percentage-based charges only, without the flat per-trade fees.
    pub fn total_taxes(&self) -> f64 {
        self.sells().map(|s| s.charges.taxes()).sum()
    }

    pub fn credited(&self) -> f64 {
        self.sells().map(|s| s.credited).sum()
    }

    pub fn open_quantity(&self) -> u64 {
        total_quantity(self.open_lots.iter())
    }
}

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditReport {
    pub companies: Vec<CompanySection>,
    pub total_credited: f64,
}

impl CreditReport {
    pub fn company(&self, name: &str) -> Option<&CompanySection> {
        self.companies.iter().find(|c| c.company == name)
    }

    pub fn rejected_count(&self) -> usize {
        self.companies.iter().map(|c| c.rejected()).sum()
    }
}
