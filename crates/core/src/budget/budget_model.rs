//! Budget domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::budget_errors::BudgetError;
use crate::authors::Author;
use crate::constants::{MAX_MONTH, MIN_MONTH};

/// Kind of a budget line item.
///
/// Serialized with the labels the budget was always published with; the
/// English variant names are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetType {
    #[serde(rename = "Приход", alias = "Income")]
    Income,
    #[serde(rename = "Расход", alias = "Expense")]
    Expense,
}

impl BudgetType {
    /// Stable code used for storage.
    pub fn as_code(&self) -> &'static str {
        match self {
            BudgetType::Income => "INCOME",
            BudgetType::Expense => "EXPENSE",
        }
    }

    /// Label used on the wire and as the key of per-type totals.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetType::Income => "Приход",
            BudgetType::Expense => "Расход",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetType {
    type Err = BudgetError;

    /// Parses a storage code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(BudgetType::Income),
            "EXPENSE" => Ok(BudgetType::Expense),
            other => Err(BudgetError::UnknownBudgetType(other.to_string())),
        }
    }
}

/// Domain model representing a stored budget record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    pub author: Option<Author>,
}

/// Input model for creating a new budget record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetRecord {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    pub author_id: Option<i32>,
}

impl NewBudgetRecord {
    /// Checks the invariants that must hold before the record is persisted.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if !(MIN_MONTH..=MAX_MONTH).contains(&self.month) {
            return Err(BudgetError::InvalidMonth(self.month));
        }
        Ok(())
    }
}

/// Parameters of the yearly statistics query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearStatsQuery {
    pub year: i32,
    pub limit: usize,
    pub offset: usize,
    /// Case-insensitive substring of the author's full name. When present,
    /// records without an author never match.
    pub author_name: Option<String>,
}

/// Yearly statistics: totals over the whole filtered set plus one page of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearStats {
    pub total: usize,
    pub total_by_type: BTreeMap<BudgetType, i64>,
    pub items: Vec<BudgetRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record(month: i32) -> NewBudgetRecord {
        NewBudgetRecord {
            year: 2020,
            month,
            amount: 5,
            budget_type: BudgetType::Income,
            author_id: None,
        }
    }

    #[test]
    fn validate_accepts_calendar_months() {
        for month in 1..=12 {
            assert!(new_record(month).validate().is_ok(), "month {month}");
        }
    }

    #[test]
    fn validate_rejects_out_of_range_months() {
        for month in [-5, 0, 13, 15] {
            assert_eq!(
                new_record(month).validate(),
                Err(BudgetError::InvalidMonth(month))
            );
        }
    }

    #[test]
    fn budget_type_uses_localized_labels() {
        assert_eq!(
            serde_json::to_string(&BudgetType::Income).unwrap(),
            "\"Приход\""
        );
        assert_eq!(
            serde_json::from_str::<BudgetType>("\"Расход\"").unwrap(),
            BudgetType::Expense
        );
        assert_eq!(
            serde_json::from_str::<BudgetType>("\"Income\"").unwrap(),
            BudgetType::Income
        );
        assert!(serde_json::from_str::<BudgetType>("\"Доход\"").is_err());
    }

    #[test]
    fn budget_type_storage_codes() {
        for budget_type in [BudgetType::Income, BudgetType::Expense] {
            assert_eq!(budget_type.as_code().parse::<BudgetType>(), Ok(budget_type));
        }
        assert_eq!(
            "SAVINGS".parse::<BudgetType>(),
            Err(BudgetError::UnknownBudgetType("SAVINGS".to_string()))
        );
    }

    #[test]
    fn new_record_reads_type_field() {
        let parsed: NewBudgetRecord = serde_json::from_str(
            r#"{"year":2020,"month":5,"amount":10,"type":"Приход","authorId":3}"#,
        )
        .unwrap();
        assert_eq!(parsed.budget_type, BudgetType::Income);
        assert_eq!(parsed.author_id, Some(3));
    }

    #[test]
    fn totals_are_keyed_by_label() {
        let stats = YearStats {
            total: 2,
            total_by_type: BTreeMap::from([(BudgetType::Income, 105), (BudgetType::Expense, 1)]),
            items: vec![],
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalByType"]["Приход"], 105);
        assert_eq!(json["totalByType"]["Расход"], 1);
    }
}
