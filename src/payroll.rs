//! Salary summaries over employees and recorded payments.

use rust_decimal::Decimal;

use crate::model::{EmployeeStatus, Record, SalaryPayment};
use crate::DataStore;

/// Sum of every recorded salary payment.
pub fn total_salary_paid(store: &DataStore) -> Decimal {
    store.salary_payments().iter().map(|p| p.amount).sum()
}

/// Combined monthly salary of active employees.
pub fn monthly_payroll(store: &DataStore) -> Decimal {
    store
        .employees()
        .iter()
        .filter(|e| e.status == EmployeeStatus::Active)
        .map(|e| e.salary)
        .sum()
}

/// Payments with the most recent payment date first.
pub fn payment_history(store: &DataStore) -> Vec<&Record<SalaryPayment>> {
    let mut payments: Vec<_> = store.salary_payments().iter().collect();
    payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
    payments
}
