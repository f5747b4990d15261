//! Entity types managed by the [`DataStore`](crate::DataStore).
//!
//! Entity structs carry only their fields. Identity is attached by the store
//! when a record is inserted, see [`Record`].

use std::ops::Deref;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency label for every monetary amount in the ledger.
pub const CURRENCY: &str = "GHS";

/// An entity together with its store-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => f.write_str("pending"),
            TransactionStatus::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub phone: String,
    pub role: String,
    /// Monthly salary in [`CURRENCY`].
    pub salary: Decimal,
    pub address: String,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Denormalized order count. Not kept in sync with the transactions collection.
    pub total_transactions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer_id: String,
    pub employee_id: String,
    /// Laundry weight in kilograms.
    pub weight: Decimal,
    pub order_date: NaiveDate,
    pub collection_date: NaiveDate,
    pub amount_to_pay: Decimal,
    pub amount_paid: Decimal,
    /// Stored as given. Use [`Transaction::with_computed_balance`] to derive it.
    pub balance: Decimal,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn computed_balance(&self) -> Decimal {
        self.amount_to_pay - self.amount_paid
    }

    /// Returns the transaction with `balance` set to amount to pay minus amount paid.
    pub fn with_computed_balance(mut self) -> Self {
        self.balance = self.computed_balance();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayment {
    pub employee_id: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
}

impl SalaryPayment {
    /// A payment of one month's salary to the given employee.
    pub fn for_employee(employee: &Record<Employee>, payment_date: NaiveDate) -> Self {
        Self {
            employee_id: employee.id.clone(),
            amount: employee.salary,
            payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn transaction(to_pay: Decimal, paid: Decimal, balance: Decimal) -> Transaction {
        Transaction {
            customer_id: "1".into(),
            employee_id: "1".into(),
            weight: dec!(2.5),
            order_date: date("2025-01-15"),
            collection_date: date("2025-01-17"),
            amount_to_pay: to_pay,
            amount_paid: paid,
            balance,
            status: TransactionStatus::Pending,
        }
    }

    #[test]
    fn test_computed_balance() {
        let tx = transaction(dec!(300), dec!(120), dec!(0));
        assert_eq!(tx.computed_balance(), dec!(180));
        // The stored balance is untouched until explicitly recomputed
        assert_eq!(tx.balance, dec!(0));
        assert_eq!(tx.with_computed_balance().balance, dec!(180));
    }

    #[test]
    fn test_overpayment_gives_negative_balance() {
        let tx = transaction(dec!(100), dec!(150), dec!(0)).with_computed_balance();
        assert_eq!(tx.balance, dec!(-50));
    }

    #[test]
    fn test_salary_payment_prefills_salary() {
        let employee = Record::new(
            "7",
            Employee {
                name: "Kofi Mensah".into(),
                phone: "0241234567".into(),
                role: "Staff".into(),
                salary: dec!(2500),
                address: "Accra".into(),
                status: EmployeeStatus::Active,
            },
        );
        let payment = SalaryPayment::for_employee(&employee, date("2025-02-01"));
        assert_eq!(payment.employee_id, "7");
        assert_eq!(payment.amount, dec!(2500));
        assert_eq!(payment.payment_date, date("2025-02-01"));
    }

    #[test]
    fn test_record_derefs_to_data() {
        let record = Record::new(
            "3",
            SalaryPayment {
                employee_id: "1".into(),
                amount: dec!(10),
                payment_date: date("2025-01-01"),
            },
        );
        assert_eq!(record.amount, dec!(10));
        assert_eq!(record.id, "3");
    }

    #[test]
    fn test_status_display_matches_serde_names() {
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
        assert_eq!(TransactionStatus::Completed.to_string(), "completed");
    }
}
