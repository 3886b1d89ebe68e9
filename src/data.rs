// src/data.rs
use crate::error::DataError;
use crate::models::WalletRecord;
use serde_json::Value;
use tracing::{error, info, warn};

/// Dataset compiled into the binary, used when no file override is set
pub const BUNDLED_WALLETS: &str = include_str!("../data/valuable_wallets_sample.json");

/// Load the wallet records once at startup.
///
/// Never fails: a bad source is logged and yields an empty table.
pub fn load(path: Option<&str>) -> Vec<WalletRecord> {
    let result = match path {
        Some(path) => read_file(path).and_then(|raw| parse_records(&raw)),
        None => parse_records(BUNDLED_WALLETS),
    };

    match result {
        Ok(records) => {
            info!(
                "Loaded {} wallets from {}",
                records.len(),
                path.unwrap_or("bundled sample")
            );
            records
        }
        Err(e) => {
            error!("Invalid data format: {}", e);
            Vec::new()
        }
    }
}

fn read_file(path: &str) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })
}

/// Parse a JSON array of `{walletAddress, netProfit}` objects.
/// Elements that don't match the record shape are skipped.
pub fn parse_records(raw: &str) -> Result<Vec<WalletRecord>, DataError> {
    let value: Value = serde_json::from_str(raw)?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(DataError::NotAnArray(json_kind(&other))),
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<WalletRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping wallet entry #{}: {}", idx, e);
                None
            }
        })
        .collect();

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn bundled_sample_parses() {
        let records = parse_records(BUNDLED_WALLETS).expect("bundled sample should parse");

        assert_eq!(records.len(), 12);
        assert!(records.iter().all(|r| r.wallet_address.starts_with("0x")));
    }

    #[test]
    fn parses_negative_zero_and_fractional_profits() {
        let raw = r#"[
            {"walletAddress": "0xA", "netProfit": -12.5},
            {"walletAddress": "0xB", "netProfit": 0},
            {"walletAddress": "0xC", "netProfit": 0.1}
        ]"#;
        let records = parse_records(raw).expect("valid records");

        let profits: Vec<Decimal> = records.iter().map(|r| r.net_profit).collect();
        assert_eq!(
            profits,
            vec![
                Decimal::from_str("-12.5").unwrap(),
                Decimal::ZERO,
                Decimal::from_str("0.1").unwrap(),
            ]
        );
    }

    #[test]
    fn non_array_is_rejected() {
        let err = parse_records(r#"{"walletAddress": "0xA", "netProfit": 1}"#).unwrap_err();

        assert!(matches!(err, DataError::NotAnArray("object")));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse_records("[{"), Err(DataError::Json(_))));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let raw = r#"[
            {"walletAddress": "0xA", "netProfit": 3},
            {"walletAddress": "0xB"},
            "0xC",
            {"walletAddress": "0xD", "netProfit": "4.25"}
        ]"#;
        let records = parse_records(raw).expect("array parses");

        let addrs: Vec<&str> = records.iter().map(|r| r.wallet_address.as_str()).collect();
        assert_eq!(addrs, vec!["0xA", "0xD"]);
    }

    #[test]
    fn load_falls_back_to_empty_on_missing_file() {
        let records = load(Some("/definitely/not/here/wallets.json"));

        assert!(records.is_empty());
    }

    #[test]
    fn load_reads_file_override() {
        let path = std::env::temp_dir().join(format!("wallets-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"walletAddress": "0xFILE", "netProfit": 42}]"#).unwrap();

        let records = load(path.to_str());
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].wallet_address, "0xFILE");
    }

    #[test]
    fn load_falls_back_to_empty_on_non_array_file() {
        let path = std::env::temp_dir().join(format!("wallets-obj-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"wallets": []}"#).unwrap();

        let records = load(path.to_str());
        std::fs::remove_file(&path).ok();

        assert!(records.is_empty());
    }
}
