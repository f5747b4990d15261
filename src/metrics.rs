//! Dashboard aggregates and their memoization.
//!
//! The cache is keyed on the store generation, a counter bumped by every
//! collection mutation. A read with no intervening mutation hands back the
//! same `Rc`; any mutation forces a full recompute on the next read.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::model::{Record, Transaction, TransactionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_employees: usize,
    pub total_customers: usize,
    pub total_transactions: usize,
    pub pending_transactions: usize,
    /// Sum of amount paid over completed transactions.
    pub total_income: Decimal,
}

impl Metrics {
    pub fn compute(
        total_employees: usize,
        total_customers: usize,
        transactions: &[Record<Transaction>],
    ) -> Self {
        let pending_transactions = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Pending)
            .count();
        let total_income = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .map(|t| t.amount_paid)
            .sum();

        Self {
            total_employees,
            total_customers,
            total_transactions: transactions.len(),
            pending_transactions,
            total_income,
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricsCache {
    cached: RefCell<Option<(u64, Rc<Metrics>)>>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached metrics if they were computed at `generation`,
    /// otherwise runs `compute` and caches its result.
    pub fn get_or_compute<F>(&self, generation: u64, compute: F) -> Rc<Metrics>
    where
        F: FnOnce() -> Metrics,
    {
        if let Some((cached_at, metrics)) = self.cached.borrow().as_ref() {
            if *cached_at == generation {
                trace!(generation, "metrics cache hit");
                return Rc::clone(metrics);
            }
        }

        trace!(generation, "metrics cache miss");
        let metrics = Rc::new(compute());
        *self.cached.borrow_mut() = Some((generation, Rc::clone(&metrics)));
        metrics
    }
}
