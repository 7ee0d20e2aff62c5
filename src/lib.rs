pub mod core;
pub mod parser;
pub mod pnl;
pub mod config;

// Re-export commonly used types
pub use crate::core::{
    Transaction, Side, InventoryLot, CreditError, Result, STATUS_SUCCESSFUL
};
pub use crate::parser::{
    LogParser, ParseOutcome, ParseDiagnostics, SkipReason, parse_transaction_log
};
pub use crate::pnl::{
    ProfitEngine, CreditReport, CompanySection, LedgerEntry, SellOutcome,
    ChargeSchedule, ChargeBreakdown, CompanyLedger, JsonReport
};
pub use crate::config::{AppConfig, OutputFormat, validate_config};

/// Parse a raw broker log and render its bank credit report.
pub fn generate_report(log: &str) -> String {
    let transactions = LogParser::new().parse(log);
    ProfitEngine::new().compute_report(&transactions)
}
