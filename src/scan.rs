//! Cursor-based full-keyspace scan and per-type memory aggregation.

use anyhow::Result;
use indicatif::ProgressBar;
use std::collections::BTreeMap;

/// Memory footprints observed per type label, in encounter order.
pub type ScanResult = BTreeMap<String, Vec<u64>>;

/// The store operations the scanner needs. Implemented for a live
/// `redis::Connection` in `redis_utils`; tests back it with an in-memory map.
pub trait Keyspace {
    /// One SCAN step: up to `count` keys starting from `cursor`, plus the
    /// next cursor. A returned cursor of 0 means the scan is complete.
    fn scan_page(&mut self, cursor: u64, count: u64) -> Result<(u64, Vec<String>)>;

    /// Type label of a key, `"none"` if the key no longer exists.
    fn key_type(&mut self, key: &str) -> Result<String>;

    /// Reported memory footprint of a key in bytes, `None` if the key no
    /// longer exists.
    fn memory_usage(&mut self, key: &str) -> Result<Option<u64>>;
}

/// Walk the whole keyspace in batches of `batch_size`, query every key's type
/// and memory footprint, and group footprints by type label.
///
/// The loop always issues at least one SCAN and stops when the returned
/// cursor is 0, so the initial cursor value never doubles as a termination
/// sentinel. Keys that vanish between enumeration and inspection (expired or
/// deleted mid-scan) are skipped.
pub fn scan_keyspace(
    store: &mut impl Keyspace,
    batch_size: u64,
    pb: &ProgressBar,
) -> Result<ScanResult> {
    let mut results = ScanResult::new();
    let mut cursor = 0;
    let mut fetched = 0;

    loop {
        let (next, keys) = store.scan_page(cursor, batch_size)?;
        for key in &keys {
            let dtype = store.key_type(key)?;
            if dtype == "none" {
                continue;
            }
            let Some(memory) = store.memory_usage(key)? else {
                continue;
            };
            results.entry(dtype).or_default().push(memory);
        }
        fetched += keys.len() as u64;
        pb.set_position(fetched);
        pb.set_message(format!("fetched {fetched} keys"));

        if next == 0 {
            break;
        }
        cursor = next;
    }

    Ok(results)
}
