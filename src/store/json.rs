//! JSON-file ledger store
//!
//! A [`LedgerFile`] is one session's complete ledger document, stored as a
//! single JSON file. Collections are kept in creation order; the
//! [`LedgerStore`] impl derives the orderings the engine expects.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::rules;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Category, CategoryRule, GoalDraft, PaymentRequest, RuleDraft, SavingGoal, SessionId,
    Transaction, TransactionId,
};

use super::LedgerStore;

/// One session's ledger, as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerFile {
    /// The owning session
    pub session: SessionId,

    /// Transactions in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Categories in creation order
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Category rules in creation order (oldest first)
    #[serde(default)]
    pub rules: Vec<CategoryRule>,

    /// Saving goals in creation order (contribution priority)
    #[serde(default)]
    pub goals: Vec<SavingGoal>,

    /// Payment requests in creation order
    #[serde(default, rename = "paymentRequests")]
    pub payment_requests: Vec<PaymentRequest>,
}

impl LedgerFile {
    /// Create an empty ledger for a fresh session
    pub fn new() -> Self {
        Self {
            session: SessionId::new(),
            transactions: Vec::new(),
            categories: Vec::new(),
            rules: Vec::new(),
            goals: Vec::new(),
            payment_requests: Vec::new(),
        }
    }

    /// Load a ledger document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write the ledger document back to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        writer.flush().map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Look up a category by (case-insensitive) name
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Add a transaction, auto-categorizing it against the session's rules
    /// (newest rule first) when no category was given. Returns the stored
    /// transaction.
    pub fn add_transaction(&mut self, mut transaction: Transaction) -> LedgerResult<Transaction> {
        transaction
            .validate()
            .map_err(LedgerError::Validation)?;
        transaction.id.get_or_insert_with(TransactionId::new);

        let rules_newest_first: Vec<CategoryRule> =
            self.rules.iter().rev().cloned().collect();
        rules::categorize(&rules_newest_first, &mut transaction);

        // Keep the ledger sorted by timestamp on insert.
        let position = self
            .transactions
            .partition_point(|t| t.timestamp <= transaction.timestamp);
        self.transactions.insert(position, transaction.clone());
        Ok(transaction)
    }

    /// Validate and add a category rule; a rule flagged `applyOnHistory` is
    /// applied once to the existing transactions. Returns the stored rule and
    /// the number of historical transactions updated.
    pub fn add_rule(&mut self, draft: RuleDraft) -> LedgerResult<(CategoryRule, usize)> {
        let rule = draft.build()?;
        let updated = if rule.apply_on_history {
            rules::apply_to_history(&rule, &mut self.transactions)
        } else {
            0
        };
        self.rules.push(rule.clone());
        Ok((rule, updated))
    }

    /// Validate and add a saving goal at the lowest contribution priority
    pub fn add_goal(&mut self, draft: GoalDraft) -> LedgerResult<SavingGoal> {
        let goal = draft.build()?;
        self.goals.push(goal.clone());
        Ok(goal)
    }
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for LedgerFile {
    fn transactions(&self, session: SessionId) -> LedgerResult<Vec<Transaction>> {
        self.check_session(session)?;
        let mut transactions = self.transactions.clone();
        transactions.sort_by_key(|t| t.timestamp);
        Ok(transactions)
    }

    fn categories(&self, session: SessionId) -> LedgerResult<Vec<Category>> {
        self.check_session(session)?;
        Ok(self.categories.clone())
    }

    fn category_rules(&self, session: SessionId) -> LedgerResult<Vec<CategoryRule>> {
        self.check_session(session)?;
        Ok(self.rules.iter().rev().cloned().collect())
    }

    fn saving_goals(&self, session: SessionId) -> LedgerResult<Vec<SavingGoal>> {
        self.check_session(session)?;
        Ok(self.goals.clone())
    }

    fn payment_requests(&self, session: SessionId) -> LedgerResult<Vec<PaymentRequest>> {
        self.check_session(session)?;
        Ok(self.payment_requests.clone())
    }
}

impl LedgerFile {
    /// Sessions never cross: a request for another session's data is an error
    fn check_session(&self, session: SessionId) -> LedgerResult<()> {
        if session == self.session {
            Ok(())
        } else {
            Err(LedgerError::NotFound {
                entity_type: "Session",
                identifier: session.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn deposit(day: u32, description: &str) -> Transaction {
        Transaction::new(
            Utc.with_ymd_and_hms(2018, 4, day, 12, 0, 0).unwrap(),
            Money::from_minor(1000),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        )
        .with_description(description)
    }

    fn wildcard_rule(category: CategoryId) -> RuleDraft {
        RuleDraft {
            description: Some(String::new()),
            iban: Some(String::new()),
            kind: Some(String::new()),
            category: Some(category),
            apply_on_history: Some(false),
        }
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut ledger = LedgerFile::new();
        ledger.add_transaction(deposit(5, "Salary")).unwrap();
        ledger.save(&path).unwrap();

        let loaded = LedgerFile::load(&path).unwrap();
        assert_eq!(loaded.session, ledger.session);
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].description, "Salary");
    }

    #[test]
    fn test_add_transaction_keeps_ledger_sorted() {
        let mut ledger = LedgerFile::new();
        ledger.add_transaction(deposit(10, "b")).unwrap();
        ledger.add_transaction(deposit(5, "a")).unwrap();

        let listed = ledger.transactions(ledger.session).unwrap();
        assert_eq!(listed[0].description, "a");
        assert_eq!(listed[1].description, "b");
    }

    #[test]
    fn test_add_transaction_auto_categorizes() {
        let category = CategoryId::new();
        let mut ledger = LedgerFile::new();
        ledger.add_rule(wildcard_rule(category)).unwrap();

        let stored = ledger.add_transaction(deposit(5, "Salary")).unwrap();
        assert_eq!(stored.category, Some(category));
        assert!(stored.id.is_some());
    }

    #[test]
    fn test_rules_listed_newest_first() {
        let older = CategoryId::new();
        let newer = CategoryId::new();
        let mut ledger = LedgerFile::new();
        ledger.add_rule(wildcard_rule(older)).unwrap();
        ledger.add_rule(wildcard_rule(newer)).unwrap();

        let rules = ledger.category_rules(ledger.session).unwrap();
        assert_eq!(rules[0].category, newer);
        assert_eq!(rules[1].category, older);
    }

    #[test]
    fn test_add_rule_applies_on_history() {
        let category = CategoryId::new();
        let mut ledger = LedgerFile::new();
        ledger.add_transaction(deposit(5, "Salary")).unwrap();
        ledger.add_transaction(deposit(6, "Salary")).unwrap();

        let mut draft = wildcard_rule(category);
        draft.apply_on_history = Some(true);
        let (_, updated) = ledger.add_rule(draft).unwrap();

        assert_eq!(updated, 2);
        assert!(ledger.transactions.iter().all(|t| t.category == Some(category)));
    }

    #[test]
    fn test_foreign_session_is_rejected() {
        let ledger = LedgerFile::new();
        let err = ledger.transactions(SessionId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
