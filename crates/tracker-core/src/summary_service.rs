use crate::tracker::BudgetTracker;

/// Headline figures for a status line.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub transaction_count: usize,
    pub category_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(tracker: &BudgetTracker) -> LedgerSummary {
        LedgerSummary {
            total_income: tracker.total_income(),
            total_expenses: tracker.total_expenses(),
            transaction_count: tracker.transactions().len(),
            category_count: tracker.aggregate_by_category().len(),
        }
    }
}
