use regex::Regex;

use crate::parser::diagnostics::SkipReason;

/// Everything from the date token up to and including the execution rate.
const HEAD_PATTERN: &str = concat!(
    r"(?P<date>[0-9]{2} [A-Za-z]+ [0-9]{4} [0-9]{2}:[0-9]{2})\s+",
    r"(?P<side>[BS])\s+",
    r"(?P<company>.*?)\s+",
    r"Delivery\s+₹\s*(?P<price>[0-9,.]+)\s+",
    r"(?P<filled>[0-9]+)\s*/\s*(?P<ordered>[0-9]+)\s+",
    r"(?P<rate>[0-9,.]+)",
);

/// Optional trailing columns: an extra numeric field (or `MKT`) and a status word.
const TAIL_PATTERN: &str = r"^\s+(?:(?P<extra>[0-9,.]+|MKT))?\s*(?P<status>[A-Za-z0-9_]+)?";

/// Raw captures of one record, borrowed from the log text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord<'a> {
    /// Byte offset of the date token in the log.
    pub offset: usize,
    pub date: &'a str,
    pub side: &'a str,
    pub company: &'a str,
    pub price: &'a str,
    pub qty_filled: &'a str,
    pub qty_ordered: &'a str,
    pub rate: &'a str,
    /// Text between the rate and the next record (or end of input).
    pub tail: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordTail<'a> {
    pub extra: Option<&'a str>,
    pub status: Option<&'a str>,
}

/// Splits a broker log into raw record captures.
///
/// Records are matched left to right without overlap. The trailing columns
/// are tokenized separately from the span that ends where the next record
/// begins, so a record without trailing columns never consumes the date of
/// the record after it.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    head: Regex,
    tail: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            head: Regex::new(HEAD_PATTERN).expect("record head pattern is valid"),
            tail: Regex::new(TAIL_PATTERN).expect("record tail pattern is valid"),
        }
    }

    pub fn records<'a>(&self, log: &'a str) -> Vec<RawRecord<'a>> {
        let mut records: Vec<RawRecord<'a>> = Vec::new();
        let mut last_end = 0;

        for caps in self.head.captures_iter(log) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            // The previous record's tail stops where this record starts
            if let Some(prev) = records.last_mut() {
                prev.tail = &log[last_end..whole.start()];
            }

            let field = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or_default();
            records.push(RawRecord {
                offset: whole.start(),
                date: field("date"),
                side: field("side"),
                company: field("company"),
                price: field("price"),
                qty_filled: field("filled"),
                qty_ordered: field("ordered"),
                rate: field("rate"),
                tail: "",
            });
            last_end = whole.end();
        }

        if let Some(last) = records.last_mut() {
            last.tail = &log[last_end..];
        }

        records
    }

    /// Tokenize the trailing columns of a record.
    pub fn split_tail<'a>(&self, tail: &'a str) -> Result<RecordTail<'a>, SkipReason> {
        if tail.is_empty() {
            return Ok(RecordTail::default());
        }

        let caps = self
            .tail
            .captures(tail)
            .ok_or_else(|| SkipReason::MalformedTail(preview(tail)))?;

        Ok(RecordTail {
            extra: caps.name("extra").map(|m| m.as_str()),
            status: caps.name("status").map(|m| m.as_str()),
        })
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(text: &str) -> String {
    text.lines().next().unwrap_or_default().chars().take(24).collect()
}
