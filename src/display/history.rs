//! Balance-history display formatting

use crate::models::BalanceHistoryBucket;

/// Format one bucket as a table row
pub fn format_bucket_row(bucket: &BalanceHistoryBucket) -> String {
    format!(
        "{:20} {:>12} {:>12} {:>12} {:>12} {:>12}",
        bucket.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        bucket.open.to_string(),
        bucket.high.to_string(),
        bucket.low.to_string(),
        bucket.close.to_string(),
        bucket.volume.to_string(),
    )
}

/// Format a balance history as a table
pub fn format_history_table(buckets: &[BalanceHistoryBucket]) -> String {
    if buckets.is_empty() {
        return "No history to report.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "Bucket end", "Open", "High", "Low", "Close", "Volume"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for bucket in buckets {
        output.push_str(&format_bucket_row(bucket));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_table_has_header_and_rows() {
        let bucket = BalanceHistoryBucket::flat(
            Money::from_minor(1050),
            Utc.with_ymd_and_hms(2018, 4, 1, 0, 0, 0).unwrap(),
        );
        let table = format_history_table(&[bucket]);
        assert!(table.contains("Close"));
        assert!(table.contains("2018-04-01 00:00"));
        assert!(table.contains("€10.50"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history_table(&[]), "No history to report.\n");
    }
}
