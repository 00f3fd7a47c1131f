//! Publisher ledger synopsis rows shown on the Payments tab

use serde::{Deserialize, Serialize};

/// Width numeric sort keys are padded to
const SORT_KEY_WIDTH: usize = 12;

/// Days after which time spent collapses to ">1y"
const MAX_DAYS_SHOWN: u64 = 364;

/// One publisher row of the ledger synopsis
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerEntry {
    pub rank: u64,
    pub site: String,
    pub views: u64,
    /// Total time spent, in milliseconds
    pub duration: u64,
    pub days_spent: u64,
    pub hours_spent: u64,
    pub minutes_spent: u64,
    pub seconds_spent: u64,
    #[serde(rename = "faviconURL", skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(rename = "publisherURL", skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
    pub percentage: u64,
}

impl LedgerEntry {
    /// Compact time-spent label, e.g. `"1d 2h 5s "`, or `">1y"`.
    ///
    /// Zero components are omitted; each present component keeps its trailing
    /// space.
    pub fn formatted_time(&self) -> String {
        if self.days_spent > MAX_DAYS_SHOWN {
            return ">1y".to_string();
        }

        [
            (self.days_spent, 'd'),
            (self.hours_spent, 'h'),
            (self.minutes_spent, 'm'),
            (self.seconds_spent, 's'),
        ]
        .iter()
        .filter(|(amount, _)| *amount != 0)
        .map(|(amount, unit)| format!("{}{} ", amount, unit))
        .collect()
    }
}

/// Payload of `ledger-updated`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerSynopsis {
    pub synopsis: Vec<LedgerEntry>,
}

/// Left-pad a number with zeros so lexical order matches numeric order
pub fn sort_key(value: u64) -> String {
    format!("{:0>width$}", value, width = SORT_KEY_WIDTH)
}
