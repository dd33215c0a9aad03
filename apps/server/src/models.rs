use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use budgetbook_core::authors as core_authors;
use budgetbook_core::budget as core_budget;

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub full_name: String,
}

impl From<AuthorRequest> for core_authors::NewAuthor {
    fn from(r: AuthorRequest) -> Self {
        Self {
            full_name: r.full_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i32,
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

impl From<core_authors::Author> for AuthorResponse {
    fn from(a: core_authors::Author) -> Self {
        Self {
            id: a.id,
            full_name: a.full_name,
            created_at: a.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    /// `Приход` or `Расход`; `Income` and `Expense` are accepted too.
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "Приход")]
    pub budget_type: core_budget::BudgetType,
    pub author_id: Option<i32>,
}

impl From<BudgetRequest> for core_budget::NewBudgetRecord {
    fn from(r: BudgetRequest) -> Self {
        Self {
            year: r.year,
            month: r.month,
            amount: r.amount,
            budget_type: r.budget_type,
            author_id: r.author_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: String,
    pub author: Option<AuthorResponse>,
}

impl From<core_budget::BudgetRecord> for BudgetResponse {
    fn from(r: core_budget::BudgetRecord) -> Self {
        Self {
            id: r.id,
            year: r.year,
            month: r.month,
            amount: r.amount,
            budget_type: r.budget_type.label().to_string(),
            author: r.author.map(AuthorResponse::from),
        }
    }
}

/// Query string of the yearly statistics endpoint.
#[derive(Deserialize, IntoParams, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct YearStatsParams {
    /// Page size.
    pub limit: usize,
    /// Number of records to skip.
    #[serde(default)]
    pub offset: usize,
    /// Case-insensitive substring of the author's full name.
    pub author_name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct YearStatsResponse {
    pub total: usize,
    pub total_by_type: BTreeMap<String, i64>,
    pub items: Vec<BudgetResponse>,
}

impl From<core_budget::YearStats> for YearStatsResponse {
    fn from(s: core_budget::YearStats) -> Self {
        Self {
            total: s.total,
            total_by_type: s
                .total_by_type
                .into_iter()
                .map(|(t, sum)| (t.label().to_string(), sum))
                .collect(),
            items: s.items.into_iter().map(BudgetResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_budget::{BudgetRecord, BudgetType, YearStats};

    #[test]
    fn stats_totals_are_keyed_by_label() {
        let mut totals = BTreeMap::new();
        totals.insert(BudgetType::Income, 105);
        let stats = YearStats {
            total: 1,
            total_by_type: totals,
            items: vec![BudgetRecord {
                id: 1,
                year: 2020,
                month: 5,
                amount: 105,
                budget_type: BudgetType::Income,
                author: None,
            }],
        };

        let json = serde_json::to_value(YearStatsResponse::from(stats)).unwrap();

        assert_eq!(json["totalByType"]["Приход"], 105);
        assert_eq!(json["items"][0]["type"], "Приход");
        assert!(json["items"][0]["author"].is_null());
    }

    #[test]
    fn budget_request_accepts_labels_and_english_names() {
        let labelled = r#"{"year":2020,"month":1,"amount":5,"type":"Расход"}"#;
        let english = r#"{"year":2020,"month":1,"amount":5,"type":"Expense","authorId":3}"#;

        let labelled: BudgetRequest = serde_json::from_str(labelled).unwrap();
        let english: BudgetRequest = serde_json::from_str(english).unwrap();

        assert_eq!(labelled.budget_type, BudgetType::Expense);
        assert_eq!(labelled.author_id, None);
        assert_eq!(english.budget_type, BudgetType::Expense);
        assert_eq!(english.author_id, Some(3));
    }
}
