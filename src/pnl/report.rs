use std::fmt::{self, Write};
use comfy_table::Table;
use serde::Serialize;

use crate::core::{Result, Transaction};
use crate::parser::ParseDiagnostics;
use crate::pnl::models::{CreditReport, LedgerEntry};

pub const CURRENCY: &str = "₹";
pub const REPORT_HEADER: &str = "=== BANK CREDIT REPORT (PROFIT ONLY) ===";
pub const TOTAL_LABEL: &str = "Total Credited to Bank (only profit):";

impl CreditReport {
    /// Plain-text report: one section per company, then the grand total.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", REPORT_HEADER);

        for section in &self.companies {
            let _ = writeln!(out, "\n--- {} ---", section.company);

            for entry in &section.entries {
                match entry {
                    LedgerEntry::Buy { date, qty, rate } => {
                        let _ = writeln!(out, "Buy {} @ {}{:.2} on {}", qty, CURRENCY, rate, date);
                    }
                    LedgerEntry::Rejected { date, qty, .. } => {
                        let _ = writeln!(
                            out,
                            "⚠️ Skipped sell of {} shares on {}, insufficient inventory.",
                            qty, date
                        );
                    }
                    LedgerEntry::Sell(sell) => {
                        let _ = writeln!(out, "Sell {} @ {}{:.2} on {}", sell.qty, CURRENCY, sell.rate, sell.date);
                        let _ = writeln!(out, "  Cost: {}{:.2}", CURRENCY, sell.cost_basis);
                        let _ = writeln!(out, "  Gross Profit: {}{:.2}", CURRENCY, sell.gross_profit);
                        let _ = writeln!(
                            out,
                            "  Charges: {}{:.2} ({}{:.0} brokerage + {}{:.0} DP + taxes)",
                            CURRENCY,
                            sell.charges.total,
                            CURRENCY,
                            sell.charges.brokerage,
                            CURRENCY,
                            sell.charges.dp_charge
                        );
                        let _ = writeln!(out, "  Net Profit: {}{:.2}", CURRENCY, sell.net_profit);
                        let _ = writeln!(out, "  ✅ Bank Credit: {}{:.2}", CURRENCY, sell.credited);
                    }
                }
            }
        }

        let _ = writeln!(out, "\n=== TOTAL ===");
        let _ = writeln!(out, "{} {}{:.2}", TOTAL_LABEL, CURRENCY, self.total_credited);
        out
    }

    /// Per-company summary table with a TOTAL row.
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            "Company",
            "Buys",
            "Sells",
            "Rejected",
            "Open Qty",
            "Gross Profit",
            "Charges",
            "Taxes",
            "Credited",
        ]);

        let mut total_buys = 0;
        let mut total_sells = 0;
        let mut total_open: u64 = 0;
        let mut total_gross = 0.0;
        let mut total_charges = 0.0;
        let mut total_taxes = 0.0;

        for section in &self.companies {
            let sells = section.sells().count();
            table.add_row(vec![
                section.company.clone(),
                section.buys().to_string(),
                sells.to_string(),
                section.rejected().to_string(),
                section.open_quantity().to_string(),
                format!("{}{:.2}", CURRENCY, section.gross_profit()),
                format!("{}{:.2}", CURRENCY, section.total_charges()),
                format!("{}{:.2}", CURRENCY, section.total_taxes()),
                format!("{}{:.2}", CURRENCY, section.credited()),
            ]);

            total_buys += section.buys();
            total_sells += sells;
            total_open = total_open.saturating_add(section.open_quantity());
            total_gross += section.gross_profit();
            total_charges += section.total_charges();
            total_taxes += section.total_taxes();
        }

        table.add_row(vec![
            "TOTAL".to_string(),
            total_buys.to_string(),
            total_sells.to_string(),
            self.rejected_count().to_string(),
            total_open.to_string(),
            format!("{}{:.2}", CURRENCY, total_gross),
            format!("{}{:.2}", CURRENCY, total_charges),
            format!("{}{:.2}", CURRENCY, total_taxes),
            format!("{}{:.2}", CURRENCY, self.total_credited),
        ]);

        table
    }
}

impl fmt::Display for CreditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Machine-readable bundle of one run: parsed transactions, the credit
/// report and, optionally, the parse diagnostics.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub transactions: &'a [Transaction],
    pub report: &'a CreditReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<&'a ParseDiagnostics>,
}

impl JsonReport<'_> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
