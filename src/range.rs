//! Parsing of range-query response bodies.
//!
//! A body is one record per line, `SUFFIX:COUNT`, where `SUFFIX` is the 35
//! trailing hex characters of a breached digest. The count is optional here
//! and padding records (count `0`) never match.

use crate::digest::SUFFIX_LEN;
use crate::error::BreachError;

/// One line of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    /// Uppercased suffix.
    pub suffix: String,
    pub count: Option<u64>,
}

impl RangeRecord {
    pub fn is_padding(&self) -> bool {
        self.count == Some(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResponse {
    records: Vec<RangeRecord>,
}

impl RangeResponse {
    /// Parses a response body. Blank lines and `\r\n` endings are accepted,
    /// anything else that is not a record fails the whole body.
    pub fn parse(body: &str) -> Result<Self, BreachError> {
        let mut records = Vec::new();

        for (idx, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records.push(parse_record(line, idx + 1)?);
        }

        Ok(Self { records })
    }

    /// Case-insensitive lookup of a suffix, skipping padding records.
    pub fn find(&self, suffix: &str) -> Option<&RangeRecord> {
        self.records
            .iter()
            .find(|r| !r.is_padding() && r.suffix.eq_ignore_ascii_case(suffix))
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.find(suffix).is_some()
    }

    pub fn records(&self) -> &[RangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<RangeRecord, BreachError> {
    let malformed = |reason| BreachError::MalformedRecord {
        line: line_no,
        reason,
    };

    let (suffix, count) = match line.split_once(':') {
        Some((suffix, count)) => (suffix.trim(), Some(count.trim())),
        None => (line, None),
    };

    if suffix.len() != SUFFIX_LEN {
        return Err(malformed("suffix has wrong length"));
    }
    if !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed("suffix is not hexadecimal"));
    }

    let count = count
        .map(|c| c.parse::<u64>().map_err(|_| malformed("count is not a number")))
        .transpose()?;

    Ok(RangeRecord {
        suffix: suffix.to_ascii_uppercase(),
        count,
    })
}
