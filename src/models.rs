// src/models.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rows shown per page
pub const PAGE_SIZE: usize = 5;

/// One wallet from the bundled dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,

    // exact; reads JSON numbers or strings, writes a number
    #[serde(rename = "netProfit", serialize_with = "rust_decimal::serde::float::serialize")]
    pub net_profit: Decimal,
}

/// Direction applied on the *next* sort toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    First,
    Previous,
    Page,
    Ellipsis,
    Next,
    Last,
}

/// A page control, independent of how it is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub kind: ButtonKind,
    pub enabled: bool,
    pub target: Option<usize>, // None for ellipses
    pub current: bool,         // highlighted, non-navigating
}

impl PageButton {
    pub fn control(kind: ButtonKind, target: usize, enabled: bool) -> Self {
        Self {
            kind,
            enabled,
            target: Some(target),
            current: false,
        }
    }

    pub fn page(target: usize) -> Self {
        Self::control(ButtonKind::Page, target, true)
    }

    pub fn current(target: usize) -> Self {
        Self {
            kind: ButtonKind::Page,
            enabled: false,
            target: Some(target),
            current: true,
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            kind: ButtonKind::Ellipsis,
            enabled: false,
            target: None,
            current: false,
        }
    }
}

/// JSON view of the table as currently rendered
#[derive(Debug, Serialize)]
pub struct TableSnapshot {
    pub records: Vec<WalletRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub next_sort: SortDirection,
    pub buttons: Vec<PageButton>,
    pub generated_at: DateTime<Utc>,
}
