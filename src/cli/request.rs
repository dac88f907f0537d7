//! Payment-request CLI commands

use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::display::format_requests_table;
use crate::engine::AnalyticsService;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, PaymentRequest};
use crate::store::LedgerFile;

/// Payment-request subcommands
#[derive(Subcommand)]
pub enum RequestCommands {
    /// Add a payment request
    Add {
        /// What the request is for
        description: String,
        /// Due date (RFC 3339); deposits qualify strictly after it
        due: String,
        /// Requested amount per deposit, in minor units
        amount: i64,
        /// Number of matching deposits required
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// List requests with their reconciliation status
    List,
}

/// Handle a payment-request command
pub fn handle_request_command(path: &Path, cmd: RequestCommands) -> LedgerResult<()> {
    match cmd {
        RequestCommands::Add {
            description,
            due,
            amount,
            count,
        } => {
            let due_date = parse_instant(&due)?;
            let mut ledger = LedgerFile::load(path)?;
            let request =
                PaymentRequest::new(description, due_date, Money::from_minor(amount), count);
            println!(
                "Added request '{}' for {} × {}",
                request.description, count, request.amount
            );
            ledger.payment_requests.push(request);
            ledger.save(path)
        }
        RequestCommands::List => {
            let ledger = LedgerFile::load(path)?;
            let service = AnalyticsService::new(&ledger);
            let requests = service.payment_requests(ledger.session)?;
            print!("{}", format_requests_table(&requests));
            Ok(())
        }
    }
}

fn parse_instant(s: &str) -> LedgerResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| LedgerError::Validation(format!("Invalid timestamp '{}': {}", s, e)))
}
