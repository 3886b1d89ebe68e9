// src/sorter.rs
use crate::models::{SortDirection, WalletRecord};
use tracing::debug;

/// Re-sort the whole collection by net profit in `direction`, returning the
/// new ordering and the direction to use on the following toggle.
pub fn sort_by_profit(
    mut records: Vec<WalletRecord>,
    direction: SortDirection,
) -> (Vec<WalletRecord>, SortDirection) {
    // stable: equal profits keep their relative order
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| a.net_profit.cmp(&b.net_profit)),
        SortDirection::Descending => records.sort_by(|a, b| b.net_profit.cmp(&a.net_profit)),
    }

    debug!("Sorted {} wallets {:?}", records.len(), direction);

    (records, direction.flipped())
}
