//! Payments ledger table view

use aboutpages_core::ledger::sort_key;
use serde::Serialize;

use crate::ledger::{LedgerColumn, LedgerState, SortDirection};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub title_l10n_id: &'static str,
    pub overlay_visible: bool,
    pub columns: Vec<LedgerColumnView>,
    pub rows: Vec<LedgerRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerColumnView {
    pub column: LedgerColumn,
    pub l10n_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRowView {
    pub rank: u64,
    pub rank_sort: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    pub views: u64,
    pub views_sort: String,
    pub time_spent: String,
    pub time_spent_sort: String,
    pub percentage: u64,
    pub percentage_sort: String,
}

pub fn build_ledger(ledger: &LedgerState) -> LedgerView {
    let sort = ledger.sort();
    let columns = LedgerColumn::ALL
        .iter()
        .map(|column| LedgerColumnView {
            column: *column,
            l10n_id: column.l10n_id(),
            sorted: sort
                .filter(|s| s.column == *column)
                .map(|s| s.direction),
        })
        .collect();

    let rows = ledger
        .rows()
        .into_iter()
        .map(|entry| LedgerRowView {
            rank: entry.rank,
            rank_sort: sort_key(entry.rank),
            site: entry.site.clone(),
            publisher_url: entry.publisher_url.clone(),
            favicon_url: entry.favicon_url.clone(),
            views: entry.views,
            views_sort: sort_key(entry.views),
            time_spent: entry.formatted_time(),
            time_spent_sort: sort_key(entry.duration),
            percentage: entry.percentage,
            percentage_sort: sort_key(entry.percentage),
        })
        .collect();

    LedgerView {
        title_l10n_id: "publisherPaymentsTitle",
        overlay_visible: ledger.overlay_visible(),
        columns,
        rows,
    }
}
