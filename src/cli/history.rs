//! Balance-history CLI command

use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Args;

use crate::display::format_history_table;
use crate::engine::{AnalyticsService, Interval, DEFAULT_BUCKET_COUNT};
use crate::error::{LedgerError, LedgerResult};
use crate::store::LedgerFile;

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// Bucket width (hour, day, week, month, year)
    #[arg(short, long, default_value = "month")]
    pub interval: String,

    /// Number of buckets to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_BUCKET_COUNT)]
    pub count: usize,

    /// Anchor instant (RFC 3339); defaults to now
    #[arg(long)]
    pub anchor: Option<String>,
}

/// Handle the history command
pub fn handle_history_command(path: &Path, args: HistoryArgs) -> LedgerResult<()> {
    let interval: Interval = args.interval.parse()?;
    let anchor = match &args.anchor {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map_err(|e| LedgerError::Validation(format!("Invalid anchor '{}': {}", s, e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let ledger = LedgerFile::load(path)?;
    let service = AnalyticsService::new(&ledger);

    match service.balance_history(ledger.session, interval, args.count, anchor) {
        Ok(report) => {
            print!("{}", format_history_table(&report.buckets));
            Ok(())
        }
        Err(err) if err.is_empty_ledger() => {
            println!("No transactions before the first bucket; nothing to report.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
