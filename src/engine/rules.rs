//! Category rule matcher
//!
//! Evaluates wildcard rules against transactions. Rules arrive in descending
//! creation order (newest first) and the first matching rule wins; a rule
//! flagged `apply_on_history` is additionally applied once, at creation time,
//! to the session's existing transactions.

use crate::models::{CategoryRule, Transaction};

/// Find the first rule matching the transaction, newest rule first
pub fn first_match<'a>(
    rules: &'a [CategoryRule],
    transaction: &Transaction,
) -> Option<&'a CategoryRule> {
    rules.iter().find(|rule| rule.matches(transaction))
}

/// Auto-categorize a freshly created transaction.
///
/// An explicitly categorized transaction is left alone; otherwise the first
/// matching rule's category is assigned. Returns whether a category was
/// assigned.
pub fn categorize(rules: &[CategoryRule], transaction: &mut Transaction) -> bool {
    if transaction.category.is_some() {
        return false;
    }
    match first_match(rules, transaction) {
        Some(rule) => {
            transaction.category = Some(rule.category);
            true
        }
        None => false,
    }
}

/// Apply one rule to the session's transaction history, assigning its
/// category to every matching transaction (existing categories are
/// overwritten). Returns the number of transactions updated.
pub fn apply_to_history(rule: &CategoryRule, transactions: &mut [Transaction]) -> usize {
    let mut updated = 0;
    for transaction in transactions.iter_mut() {
        if rule.matches(transaction) {
            transaction.category = Some(rule.category);
            updated += 1;
        }
    }
    updated
}
