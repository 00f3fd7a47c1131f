//! Payments tab state: ledger rows, column sort and the log overlay

use std::cmp::Ordering;

use aboutpages_core::ledger::sort_key;
use aboutpages_core::LedgerEntry;
use serde::{Deserialize, Serialize};

/// Sortable ledger columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LedgerColumn {
    Rank,
    Publisher,
    Views,
    TimeSpent,
    Percentage,
}

impl LedgerColumn {
    pub const ALL: [LedgerColumn; 5] = [
        Self::Rank,
        Self::Publisher,
        Self::Views,
        Self::TimeSpent,
        Self::Percentage,
    ];

    /// Header localization id
    pub fn l10n_id(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Publisher => "publisher",
            Self::Views => "views",
            Self::TimeSpent => "timeSpent",
            Self::Percentage => "percentage",
        }
    }

    /// Text key this column sorts by. Numeric columns are zero padded so a
    /// plain string comparison orders them numerically.
    pub fn sort_value(&self, entry: &LedgerEntry) -> String {
        match self {
            Self::Rank => sort_key(entry.rank),
            Self::Publisher => entry.site.to_lowercase(),
            Self::Views => sort_key(entry.views),
            Self::TimeSpent => sort_key(entry.duration),
            Self::Percentage => sort_key(entry.percentage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSort {
    pub column: LedgerColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    entries: Vec<LedgerEntry>,
    sort: Option<LedgerSort>,
    overlay_visible: bool,
}

impl LedgerState {
    /// Replace the rows; the chosen sort survives
    pub fn replace(&mut self, entries: Vec<LedgerEntry>) {
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sort(&self) -> Option<LedgerSort> {
        self.sort
    }

    /// Sort by `column`, ascending first; the same column again flips it
    pub fn sort_by(&mut self, column: LedgerColumn) {
        self.sort = Some(match self.sort {
            Some(current) if current.column == column => LedgerSort {
                column,
                direction: current.direction.flipped(),
            },
            _ => LedgerSort {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Rows in display order. Unsorted tables keep push order.
    pub fn rows(&self) -> Vec<&LedgerEntry> {
        let mut rows: Vec<&LedgerEntry> = self.entries.iter().collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering: Ordering = sort
                    .column
                    .sort_value(a)
                    .cmp(&sort.column.sort_value(b));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn show_overlay(&mut self) {
        self.overlay_visible = true;
    }

    pub fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }
}
