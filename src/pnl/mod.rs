pub mod models;
pub mod charges;
pub mod fifo;
pub mod calculator;
pub mod report;


pub use models::{CompanySection, CreditReport, LedgerEntry, SellOutcome};
pub use charges::{ChargeBreakdown, ChargeSchedule};
pub use fifo::CompanyLedger;
pub use calculator::{group_by_company, ProfitEngine};
pub use report::{JsonReport, CURRENCY, REPORT_HEADER, TOTAL_LABEL};
