use std::collections::HashMap;
use log::{info, warn};

use crate::core::{Side, Transaction};
use crate::pnl::{
    charges::ChargeSchedule,
    fifo::CompanyLedger,
    models::{CompanySection, CreditReport, LedgerEntry, SellOutcome},
};

/// Computes profit-only bank credits from chronologically ordered transactions.
///
/// Holds no state between runs: every call builds its own per-company
/// ledgers, so one engine can serve independent logs concurrently.
#[derive(Debug, Clone)]
pub struct ProfitEngine {
    schedule: ChargeSchedule,
}

impl ProfitEngine {
    pub fn new() -> Self {
        Self {
            schedule: ChargeSchedule::STANDARD,
        }
    }

    /// Render the bank credit report for a list of transactions
    ///
    /// # Arguments
    /// * `transactions` - Transactions sorted by time, as returned by the log parser
    ///
    /// # Returns
    /// * `String` - Per-company sections followed by a total section; the last
    ///   line carries the total credited amount
    pub fn compute_report(&self, transactions: &[Transaction]) -> String {
        self.compute(transactions).render()
    }

    /// Run FIFO matching per company and settle every sell
    ///
    /// Companies appear in order of first appearance. Sells that exceed the
    /// shares on hand become [`LedgerEntry::Rejected`] and add nothing to the
    /// total.
    ///
    /// # Arguments
    /// * `transactions` - Transactions sorted by time
    ///
    /// # Returns
    /// * `CreditReport` - Ledger entries and open lots per company, plus the total credited
    pub fn compute(&self, transactions: &[Transaction]) -> CreditReport {
        let mut companies = Vec::new();
        let mut total_credited = 0.0;

        // Each company gets its own lot queue for this run only
        for (company, company_txs) in group_by_company(transactions) {
            let mut ledger = CompanyLedger::new(company);
            let mut entries = Vec::with_capacity(company_txs.len());

            for tx in company_txs {
                match tx.side {
                    // Buys open a new lot at the tail of the queue
                    Side::Buy => {
                        ledger.buy(tx.qty, tx.rate);
                        entries.push(LedgerEntry::Buy {
                            date: tx.date.clone(),
                            qty: tx.qty,
                            rate: tx.rate,
                        });
                    }
                    // Sells consume the oldest lots; profit is floored at zero
                    Side::Sell => match ledger.sell(tx.qty) {
                        Ok(cost_basis) => {
                            let outcome = self.settle(tx, cost_basis);
                            total_credited += outcome.credited;
                            entries.push(LedgerEntry::Sell(outcome));
                        }
                        Err(e) => {
                            warn!("Skipping {} sell on {}: {}", ledger.company(), tx.date, e);
                            entries.push(LedgerEntry::Rejected {
                                date: tx.date.clone(),
                                qty: tx.qty,
                                available: ledger.available(),
                            });
                        }
                    },
                }
            }

            companies.push(CompanySection {
                company: company.to_string(),
                entries,
                open_lots: ledger.open_lots(),
            });
        }

        let report = CreditReport {
            companies,
            total_credited,
        };

        info!(
            "Processed {} transactions across {} companies ({} sells rejected), total credited {:.2}",
            transactions.len(),
            report.companies.len(),
            report.rejected_count(),
            report.total_credited
        );

        report
    }

    fn settle(&self, tx: &Transaction, cost_basis: f64) -> SellOutcome {
        let turnover = tx.rate * tx.qty as f64;
        let charges = self.schedule.charges_for(turnover);
        let gross_profit = turnover - cost_basis;
        let net_profit = gross_profit - charges.total;

        SellOutcome {
            date: tx.date.clone(),
            qty: tx.qty,
            rate: tx.rate,
            cost_basis,
            gross_profit,
            charges,
            net_profit,
            credited: net_profit.max(0.0),
        }
    }
}

impl Default for ProfitEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Group transactions by company, keeping first-appearance order of
/// companies and the input order within each group.
pub fn group_by_company(transactions: &[Transaction]) -> Vec<(&str, Vec<&Transaction>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Transaction>)> = Vec::new();

    for tx in transactions {
        let slot = *index.entry(tx.company.as_str()).or_insert_with(|| {
            groups.push((tx.company.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(tx);
    }

    groups
}
