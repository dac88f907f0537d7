//! Category rule model
//!
//! A rule assigns a category to transactions whose description, counterparty
//! IBAN, and direction each match the rule's pattern fields. An empty pattern
//! field is a wildcard that matches anything.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::ids::{CategoryId, RuleId};
use super::transaction::Transaction;

/// A wildcard categorization rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Unique identifier
    pub id: RuleId,

    /// Description pattern; empty matches any description
    pub description: String,

    /// Counterparty IBAN pattern; empty matches any counterparty
    #[serde(rename = "iBAN")]
    pub iban: String,

    /// Direction pattern ("deposit" / "withdrawal"); empty matches either
    #[serde(rename = "type")]
    pub kind: String,

    /// The category assigned on a match
    pub category: CategoryId,

    /// Whether the rule was applied to the session's existing transactions
    /// once, at creation time
    #[serde(rename = "applyOnHistory")]
    pub apply_on_history: bool,
}

impl CategoryRule {
    /// Check whether this rule matches a transaction: every non-empty pattern
    /// field must equal the transaction's corresponding field.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        (self.description.is_empty() || self.description == transaction.description)
            && (self.iban.is_empty() || self.iban == transaction.external_iban)
            && (self.kind.is_empty() || self.kind == transaction.kind.to_string())
    }
}

/// Incoming rule with every field optional, as received off the wire
///
/// All four matching fields and the apply-on-history flag must be present for
/// the rule to be well-formed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleDraft {
    pub description: Option<String>,
    #[serde(rename = "iBAN")]
    pub iban: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<CategoryId>,
    #[serde(rename = "applyOnHistory")]
    pub apply_on_history: Option<bool>,
}

impl RuleDraft {
    /// Validate the draft into a well-formed rule
    pub fn build(self) -> LedgerResult<CategoryRule> {
        let description = self
            .description
            .ok_or_else(|| LedgerError::MalformedRule("description is required".into()))?;
        let iban = self
            .iban
            .ok_or_else(|| LedgerError::MalformedRule("iBAN is required".into()))?;
        let kind = self
            .kind
            .ok_or_else(|| LedgerError::MalformedRule("type is required".into()))?;
        let category = self
            .category
            .ok_or_else(|| LedgerError::MalformedRule("category is required".into()))?;
        let apply_on_history = self
            .apply_on_history
            .ok_or_else(|| LedgerError::MalformedRule("applyOnHistory is required".into()))?;

        if !kind.is_empty() && kind != "deposit" && kind != "withdrawal" {
            return Err(LedgerError::MalformedRule(format!(
                "type must be empty, \"deposit\" or \"withdrawal\", got \"{}\"",
                kind
            )));
        }

        Ok(CategoryRule {
            id: RuleId::new(),
            description,
            iban,
            kind,
            category,
            apply_on_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn rule(description: &str, iban: &str, kind: &str) -> CategoryRule {
        CategoryRule {
            id: RuleId::new(),
            description: description.to_string(),
            iban: iban.to_string(),
            kind: kind.to_string(),
            category: CategoryId::new(),
            apply_on_history: false,
        }
    }

    fn transaction() -> Transaction {
        Transaction::new(
            Utc.with_ymd_and_hms(2018, 4, 1, 12, 0, 0).unwrap(),
            Money::from_minor(1000),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        )
        .with_description("Salary")
    }

    #[test]
    fn test_all_wildcards_match_everything() {
        assert!(rule("", "", "").matches(&transaction()));
    }

    #[test]
    fn test_kind_field_must_match_exactly() {
        assert!(rule("", "", "deposit").matches(&transaction()));
        assert!(!rule("", "", "withdrawal").matches(&transaction()));
    }

    #[test]
    fn test_all_fields_must_match() {
        assert!(rule("Salary", "NL39RABO0300065264", "deposit").matches(&transaction()));
        assert!(!rule("Salary", "NL02ABNA0457180536", "deposit").matches(&transaction()));
        assert!(!rule("Rent", "NL39RABO0300065264", "deposit").matches(&transaction()));
    }

    #[test]
    fn test_draft_requires_all_fields() {
        let draft = RuleDraft {
            description: Some("".into()),
            iban: Some("".into()),
            kind: Some("".into()),
            category: Some(CategoryId::new()),
            apply_on_history: None,
        };
        assert!(matches!(
            draft.build(),
            Err(LedgerError::MalformedRule(_))
        ));
    }

    #[test]
    fn test_draft_rejects_unknown_direction() {
        let draft = RuleDraft {
            description: Some("".into()),
            iban: Some("".into()),
            kind: Some("transfer".into()),
            category: Some(CategoryId::new()),
            apply_on_history: Some(false),
        };
        assert!(matches!(draft.build(), Err(LedgerError::MalformedRule(_))));
    }

    #[test]
    fn test_draft_builds_well_formed_rule() {
        let category = CategoryId::new();
        let rule = RuleDraft {
            description: Some("Salary".into()),
            iban: Some("".into()),
            kind: Some("deposit".into()),
            category: Some(category),
            apply_on_history: Some(true),
        }
        .build()
        .unwrap();

        assert_eq!(rule.category, category);
        assert!(rule.apply_on_history);
    }
}
