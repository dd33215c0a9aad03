//! Aggregation and pagination of yearly statistics.
//!
//! Totals are always computed over the whole filtered set. The page is cut
//! from the same ordered set afterwards, so `limit` and `offset` never change
//! `total` or `total_by_type`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::budget_model::{BudgetRecord, YearStats};

/// Ordering of records in yearly statistics: month ascending, amount
/// descending, id ascending.
pub fn compare_for_stats(a: &BudgetRecord, b: &BudgetRecord) -> Ordering {
    a.month
        .cmp(&b.month)
        .then_with(|| b.amount.cmp(&a.amount))
        .then_with(|| a.id.cmp(&b.id))
}

/// Builds the statistics for an already filtered and ordered set of records.
pub fn build_year_stats(ordered: Vec<BudgetRecord>, limit: usize, offset: usize) -> YearStats {
    let total = ordered.len();

    let mut total_by_type = BTreeMap::new();
    for record in &ordered {
        *total_by_type.entry(record.budget_type).or_insert(0i64) += i64::from(record.amount);
    }

    let items = ordered.into_iter().skip(offset).take(limit).collect();

    YearStats {
        total,
        total_by_type,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetType;

    fn record(id: i32, month: i32, amount: i32, budget_type: BudgetType) -> BudgetRecord {
        BudgetRecord {
            id,
            year: 2020,
            month,
            amount,
            budget_type,
            author: None,
        }
    }

    fn sorted(mut records: Vec<BudgetRecord>) -> Vec<BudgetRecord> {
        records.sort_by(compare_for_stats);
        records
    }

    fn amounts(records: &[BudgetRecord]) -> Vec<i32> {
        records.iter().map(|r| r.amount).collect()
    }

    #[test]
    fn totals_cover_the_whole_set_not_the_page() {
        let records = sorted(vec![
            record(1, 5, 10, BudgetType::Income),
            record(2, 5, 5, BudgetType::Income),
            record(3, 5, 20, BudgetType::Income),
            record(4, 5, 30, BudgetType::Income),
            record(5, 5, 40, BudgetType::Income),
        ]);

        let stats = build_year_stats(records, 3, 1);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.items.len(), 3);
        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&105));
        assert_eq!(amounts(&stats.items), vec![30, 20, 10]);
    }

    #[test]
    fn sums_are_split_by_type_and_absent_types_are_omitted() {
        let records = sorted(vec![
            record(1, 1, 100, BudgetType::Expense),
            record(2, 2, 40, BudgetType::Expense),
        ]);

        let stats = build_year_stats(records, 10, 0);

        assert_eq!(stats.total_by_type.len(), 1);
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&140));
        assert!(!stats.total_by_type.contains_key(&BudgetType::Income));
    }

    #[test]
    fn orders_by_month_then_amount_descending() {
        let records = sorted(vec![
            record(1, 5, 100, BudgetType::Income),
            record(2, 1, 5, BudgetType::Income),
            record(3, 5, 50, BudgetType::Income),
            record(4, 1, 30, BudgetType::Income),
            record(5, 5, 400, BudgetType::Income),
        ]);

        let stats = build_year_stats(records, 100, 0);

        assert_eq!(amounts(&stats.items), vec![30, 5, 400, 100, 50]);
        for pair in stats.items.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.month < b.month || (a.month == b.month && a.amount >= b.amount));
        }
    }

    #[test]
    fn equal_month_and_amount_fall_back_to_id() {
        let records = sorted(vec![
            record(9, 3, 10, BudgetType::Income),
            record(2, 3, 10, BudgetType::Expense),
        ]);
        let ids: Vec<i32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn zero_limit_keeps_aggregates() {
        let records = sorted(vec![
            record(1, 1, 7, BudgetType::Income),
            record(2, 2, 3, BudgetType::Expense),
        ]);

        let stats = build_year_stats(records, 0, 0);

        assert!(stats.items.is_empty());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&7));
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&3));
    }

    #[test]
    fn offset_past_the_end_yields_no_items() {
        let records = sorted(vec![record(1, 1, 7, BudgetType::Income)]);

        let stats = build_year_stats(records, 10, 5);

        assert!(stats.items.is_empty());
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn empty_set_has_empty_totals() {
        let stats = build_year_stats(Vec::new(), 10, 0);

        assert_eq!(stats.total, 0);
        assert!(stats.total_by_type.is_empty());
        assert!(stats.items.is_empty());
    }

    #[test]
    fn page_is_a_slice_of_the_ordered_set() {
        let records = sorted(
            (1..=20)
                .map(|i| record(i, (i % 12) + 1, i * 3 % 17, BudgetType::Income))
                .collect(),
        );

        for (limit, offset) in [(0, 0), (1, 0), (5, 3), (7, 15), (30, 0), (4, 19), (4, 20)] {
            let stats = build_year_stats(records.clone(), limit, offset);
            let end = (offset + limit).min(records.len());
            let start = offset.min(records.len());
            assert_eq!(
                stats.items,
                records[start..end].to_vec(),
                "limit {limit} offset {offset}"
            );
            assert_eq!(stats.total, records.len());
        }
    }

    #[test]
    fn large_amounts_do_not_overflow_the_sum() {
        let records = sorted(vec![
            record(1, 1, i32::MAX, BudgetType::Income),
            record(2, 2, i32::MAX, BudgetType::Income),
        ]);

        let stats = build_year_stats(records, 1, 0);

        assert_eq!(
            stats.total_by_type.get(&BudgetType::Income),
            Some(&(2 * i64::from(i32::MAX)))
        );
    }
}
