//! Payment-request reconciler
//!
//! Greedily matches qualifying deposits against outstanding payment requests.
//! First-fit: each deposit is offered to the requests in their
//! existing order and consumed by the first one that is unfilled, past due,
//! and of exactly the deposit's amount. No attempt is made at optimal
//! bipartite matching.

use crate::models::{PaymentRequest, Transaction};

/// Annotate payment requests with their matched deposits and filled flags.
///
/// Deposits are scanned in ledger order; withdrawals never match. A deposit
/// qualifies for a request when the request is not yet filled, its due date
/// lies strictly before the deposit's timestamp, and the amounts are exactly
/// equal. Each deposit is consumed by at most one request.
pub fn reconcile(
    requests: &[PaymentRequest],
    transactions: &[Transaction],
) -> Vec<PaymentRequest> {
    let mut requests: Vec<PaymentRequest> = requests
        .iter()
        .cloned()
        .map(|mut request| {
            request.clear_matches();
            request
        })
        .collect();

    for transaction in transactions {
        if !transaction.is_deposit() {
            continue;
        }
        let qualifying = requests.iter_mut().find(|request| {
            !request.filled
                && request.due_date < transaction.timestamp
                && request.amount == transaction.amount
        });
        if let Some(request) = qualifying {
            request.consume(transaction.clone());
        }
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 4, d, 12, 0, 0).unwrap()
    }

    fn request(due_day: u32, minor: i64, count: usize) -> PaymentRequest {
        PaymentRequest::new("Dinner", at(due_day), Money::from_minor(minor), count)
    }

    fn deposit(day: u32, minor: i64) -> Transaction {
        Transaction::new(
            at(day),
            Money::from_minor(minor),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        )
    }

    fn withdrawal(day: u32, minor: i64) -> Transaction {
        Transaction::new(
            at(day),
            Money::from_minor(minor),
            TransactionKind::Withdrawal,
            "NL39RABO0300065264",
        )
    }

    #[test]
    fn test_first_request_in_list_order_wins_ties() {
        let requests = vec![request(1, 5000, 1), request(1, 5000, 1)];
        let ledger = vec![deposit(5, 5000)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(reconciled[0].filled);
        assert!(!reconciled[1].filled);
        assert_eq!(reconciled[0].transactions.len(), 1);
    }

    #[test]
    fn test_withdrawals_never_match() {
        let requests = vec![request(1, 5000, 1)];
        let ledger = vec![withdrawal(5, 5000)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(!reconciled[0].filled);
        assert!(reconciled[0].transactions.is_empty());
    }

    #[test]
    fn test_deposit_before_due_date_does_not_qualify() {
        let requests = vec![request(10, 5000, 1)];
        let ledger = vec![deposit(5, 5000)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(!reconciled[0].filled);
    }

    #[test]
    fn test_amount_must_match_exactly() {
        let requests = vec![request(1, 5000, 1)];
        let ledger = vec![deposit(5, 4999), deposit(6, 5001)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(!reconciled[0].filled);
    }

    #[test]
    fn test_multi_deposit_request_fills_at_required_count() {
        let requests = vec![request(1, 2500, 2)];
        let ledger = vec![deposit(5, 2500), deposit(6, 2500), deposit(7, 2500)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(reconciled[0].filled);
        // The third deposit finds no open request and stays unmatched.
        assert_eq!(reconciled[0].transactions.len(), 2);
    }

    #[test]
    fn test_filled_request_passes_deposits_to_the_next() {
        let requests = vec![request(1, 2500, 1), request(2, 2500, 1)];
        let ledger = vec![deposit(5, 2500), deposit(6, 2500)];

        let reconciled = reconcile(&requests, &ledger);
        assert!(reconciled[0].filled);
        assert!(reconciled[1].filled);
    }

    #[test]
    fn test_stale_annotations_are_reset() {
        let mut stale = request(1, 2500, 1);
        stale.filled = true;
        stale.transactions.push(deposit(2, 2500));

        let reconciled = reconcile(&[stale], &[]);
        assert!(!reconciled[0].filled);
        assert!(reconciled[0].transactions.is_empty());
    }
}
