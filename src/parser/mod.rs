//! Recovery of buy/sell transactions from free-text broker logs.
//!
//! Parsing runs as a pipeline: the [`Tokenizer`] captures raw fields, the
//! converters in [`fields`] turn them into typed values and apply the validity
//! rule, and [`LogParser`] assembles the ordered transaction list. A record
//! that fails any stage is skipped and noted in [`ParseDiagnostics`]; parsing
//! itself never fails.

pub mod diagnostics;
pub mod fields;
pub mod tokenizer;


use log::{debug, info, trace};
use serde::Serialize;

use crate::core::Transaction;

pub use diagnostics::{ParseDiagnostics, SkipReason, SkippedRecord};
pub use tokenizer::{RawRecord, RecordTail, Tokenizer};

/// Transactions plus what was skipped on the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    pub diagnostics: ParseDiagnostics,
}

#[derive(Debug, Clone, Default)]
pub struct LogParser {
    tokenizer: Tokenizer,
}

impl LogParser {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Extract retained transactions, sorted by timestamp. Equal timestamps keep log order.
    pub fn parse(&self, log: &str) -> Vec<Transaction> {
        self.parse_with_diagnostics(log).transactions
    }

    pub fn parse_with_diagnostics(&self, log: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for raw in self.tokenizer.records(log) {
            outcome.diagnostics.matched += 1;

            match self.convert(&raw) {
                Ok(transaction) => outcome.transactions.push(transaction),
                Err(reason) => {
                    debug!(
                        "Skipping record at offset {} ({} {}): {}",
                        raw.offset,
                        raw.date,
                        raw.company.trim(),
                        reason
                    );
                    outcome.diagnostics.skipped.push(SkippedRecord {
                        offset: raw.offset,
                        date: raw.date.to_string(),
                        company: raw.company.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        // Vec::sort_by_key is stable
        outcome.transactions.sort_by_key(|t| t.datetime);
        outcome.diagnostics.retained = outcome.transactions.len();

        info!(
            "Parsed broker log: {} matched, {} retained, {} skipped",
            outcome.diagnostics.matched,
            outcome.diagnostics.retained,
            outcome.diagnostics.skipped_count()
        );

        outcome
    }

    fn convert(&self, raw: &RawRecord<'_>) -> Result<Transaction, SkipReason> {
        let price = fields::parse_amount("price", raw.price)?;
        let qty_filled = fields::parse_quantity("filled quantity", raw.qty_filled)?;
        let qty_ordered = fields::parse_quantity("ordered quantity", raw.qty_ordered)?;
        let rate = fields::parse_amount("rate", raw.rate)?;
        let tail = self.tokenizer.split_tail(raw.tail)?;
        if let Some(extra) = tail.extra {
            trace!("Ignoring extra column '{}' of record at offset {}", extra, raw.offset);
        }

        fields::check_validity(tail.status, qty_filled, qty_ordered)?;

        let datetime = fields::parse_datetime(raw.date)?;
        let side = fields::parse_side(raw.side)?;

        Ok(Transaction::new(
            raw.date.to_string(),
            datetime,
            side,
            raw.company.trim().to_string(),
            price,
            qty_filled,
            rate,
        ))
    }
}

/// Parse a broker log with a fresh [`LogParser`].
pub fn parse_transaction_log(log: &str) -> Vec<Transaction> {
    LogParser::new().parse(log)
}
