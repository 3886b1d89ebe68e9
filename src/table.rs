// src/table.rs
use chrono::Utc;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::models::{PageButton, SortDirection, TableSnapshot, WalletRecord, PAGE_SIZE};
use crate::pager::{self, PageRequest};
use crate::sorter;

/// Receives the path a row selection navigates to
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

// RFC 3986 unreserved characters stay literal
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Detail view path for a wallet. The address is percent-encoded into a
/// single path segment; the router decodes it back verbatim.
pub fn wallet_path(wallet_address: &str) -> String {
    format!("/wallet/{}", utf8_percent_encode(wallet_address, PATH_SEGMENT))
}

/// State of the wallet listing view.
///
/// `records` is the working order and is replaced on each sort.
/// Page count is always derived from the current length.
#[derive(Debug, Clone)]
pub struct WalletTable {
    records: Vec<WalletRecord>,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: usize,
}

impl WalletTable {
    pub fn new(records: Vec<WalletRecord>) -> Self {
        Self {
            records,
            sort_direction: SortDirection::default(),
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }

    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn next_sort(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.records.len(), self.page_size)
    }

    pub fn visible_rows(&self) -> &[WalletRecord] {
        pager::visible_slice(&self.records, self.current_page, self.page_size)
    }

    pub fn buttons(&self) -> Vec<PageButton> {
        pager::page_buttons(self.current_page, self.total_pages())
    }

    /// Re-sort every record by net profit and flip the direction.
    /// The current page is left where it was.
    pub fn toggle_sort(&mut self) -> SortDirection {
        let applied = self.sort_direction;
        let records = std::mem::take(&mut self.records);
        let (sorted, next) = sorter::sort_by_profit(records, applied);
        self.records = sorted;
        self.sort_direction = next;
        applied
    }

    pub fn change_page(&mut self, request: PageRequest) -> usize {
        let page = pager::change_page(request, self.current_page, self.total_pages());
        debug!("Page change {:?}: {} -> {}", request, self.current_page, page);
        self.current_page = page;
        page
    }

    pub fn select_row<N: Navigator>(&self, wallet_address: &str, navigator: &mut N) {
        let path = wallet_path(wallet_address);
        debug!("Navigating to {}", path);
        navigator.navigate(&path);
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            records: self.visible_rows().to_vec(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            page_size: self.page_size,
            total_records: self.records().len(),
            next_sort: self.sort_direction,
            buttons: self.buttons(),
            generated_at: Utc::now(),
        }
    }
}
