//! Read-only projections of the store into named-column rows.
//!
//! Each report kind has its own row type. Column names come from the serde
//! renames, so the CSV header and the field order are defined in one place.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::TransactionStatus;
use crate::{DataStore, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Customers,
    Transactions,
    Salaries,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Customers,
        ReportKind::Transactions,
        ReportKind::Salaries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Customers => "customers",
            ReportKind::Transactions => "transactions",
            ReportKind::Salaries => "salaries",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownReportKind(s.to_owned()))
    }
}

/// Inclusive date filter. Applies only when both bounds are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerReportRow {
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Total Orders")]
    pub total_orders: usize,
    #[serde(rename = "Total Weight (KG)")]
    pub total_weight: Decimal,
    #[serde(rename = "Total Amount")]
    pub total_amount: Decimal,
    #[serde(rename = "Amount Paid")]
    pub amount_paid: Decimal,
    #[serde(rename = "Outstanding Balance")]
    pub outstanding_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionReportRow {
    #[serde(rename = "Order ID")]
    pub order_id: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Weight (KG)")]
    pub weight: Decimal,
    #[serde(rename = "Order Date")]
    pub order_date: NaiveDate,
    #[serde(rename = "Collection Date")]
    pub collection_date: NaiveDate,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Paid")]
    pub paid: Decimal,
    #[serde(rename = "Balance")]
    pub balance: Decimal,
    #[serde(rename = "Status")]
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryReportRow {
    #[serde(rename = "Employee")]
    pub employee: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Payment Date")]
    pub payment_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Customers(Vec<CustomerReportRow>),
    Transactions(Vec<TransactionReportRow>),
    Salaries(Vec<SalaryReportRow>),
}

impl Report {
    pub fn generate(store: &DataStore, kind: ReportKind, range: DateRange) -> Self {
        match kind {
            ReportKind::Customers => Report::Customers(customer_rows(store, range)),
            ReportKind::Transactions => Report::Transactions(transaction_rows(store, range)),
            ReportKind::Salaries => Report::Salaries(salary_rows(store, range)),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Customers(_) => ReportKind::Customers,
            Report::Transactions(_) => ReportKind::Transactions,
            Report::Salaries(_) => ReportKind::Salaries,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Customers(rows) => rows.len(),
            Report::Transactions(rows) => rows.len(),
            Report::Salaries(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One row per customer with at least one order in range, in customer order.
fn customer_rows(store: &DataStore, range: DateRange) -> Vec<CustomerReportRow> {
    store
        .customers()
        .iter()
        .filter_map(|customer| {
            let orders: Vec<_> = store
                .transactions()
                .iter()
                .filter(|t| t.customer_id == customer.id && range.contains(t.order_date))
                .collect();
            if orders.is_empty() {
                return None;
            }
            Some(CustomerReportRow {
                customer_name: customer.name.clone(),
                phone: customer.phone.clone(),
                address: customer.address.clone(),
                total_orders: orders.len(),
                total_weight: orders.iter().map(|t| t.weight).sum(),
                total_amount: orders.iter().map(|t| t.amount_to_pay).sum(),
                amount_paid: orders.iter().map(|t| t.amount_paid).sum(),
                outstanding_balance: orders.iter().map(|t| t.balance).sum(),
            })
        })
        .collect()
}

fn transaction_rows(store: &DataStore, range: DateRange) -> Vec<TransactionReportRow> {
    store
        .transactions()
        .iter()
        .filter(|t| range.contains(t.order_date))
        .map(|t| TransactionReportRow {
            order_id: t.id.clone(),
            customer: store.customer_name(&t.customer_id).to_owned(),
            weight: t.weight,
            order_date: t.order_date,
            collection_date: t.collection_date,
            amount: t.amount_to_pay,
            paid: t.amount_paid,
            balance: t.balance,
            status: t.status,
        })
        .collect()
}

fn salary_rows(store: &DataStore, range: DateRange) -> Vec<SalaryReportRow> {
    store
        .salary_payments()
        .iter()
        .filter(|p| range.contains(p.payment_date))
        .map(|p| SalaryReportRow {
            employee: store.employee_name(&p.employee_id).to_owned(),
            amount: p.amount,
            payment_date: p.payment_date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, SalaryPayment, Transaction};
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn order(customer_id: &str, order_date: &str, to_pay: Decimal, paid: Decimal) -> Transaction {
        Transaction {
            customer_id: customer_id.into(),
            employee_id: "2".into(),
            weight: dec!(1.5),
            order_date: date(order_date),
            collection_date: date(order_date),
            amount_to_pay: to_pay,
            amount_paid: paid,
            balance: to_pay - paid,
            status: TransactionStatus::Pending,
        }
    }

    #[test]
    fn test_report_kind_names() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
        assert!(matches!(
            "employees".parse::<ReportKind>(),
            Err(Error::UnknownReportKind(name)) if name == "employees"
        ));
    }

    #[test]
    fn test_date_range_needs_both_bounds() {
        let d = date("2025-01-15");
        assert!(DateRange::unbounded().contains(d));
        let half_open = DateRange {
            from: Some(date("2025-02-01")),
            to: None,
        };
        assert!(half_open.contains(d));
        assert!(DateRange::new(d, d).contains(d));
        assert!(!DateRange::new(date("2025-01-16"), date("2025-01-31")).contains(d));
    }

    #[test]
    fn test_seeded_customer_report() {
        let store = DataStore::seeded();
        let Report::Customers(rows) =
            Report::generate(&store, ReportKind::Customers, DateRange::unbounded())
        else {
            panic!("expected customer report");
        };
        assert_eq!(
            rows,
            vec![
                CustomerReportRow {
                    customer_name: "Hassan Ahmed".into(),
                    phone: "03101234567".into(),
                    address: "Clifton".into(),
                    total_orders: 1,
                    total_weight: dec!(5),
                    total_amount: dec!(500),
                    amount_paid: dec!(500),
                    outstanding_balance: dec!(0),
                },
                CustomerReportRow {
                    customer_name: "Zainab Khan".into(),
                    phone: "03109876543".into(),
                    address: "Defence".into(),
                    total_orders: 1,
                    total_weight: dec!(3),
                    total_amount: dec!(300),
                    amount_paid: dec!(0),
                    outstanding_balance: dec!(300),
                },
            ]
        );
    }

    #[test]
    fn test_customer_report_aggregates_and_skips_idle_customers() {
        let mut store = DataStore::seeded();
        store.add_customer(Customer {
            name: "No Orders".into(),
            phone: "0".into(),
            address: "Tema".into(),
            total_transactions: 9,
        });
        store.add_transaction(order("1", "2025-01-20", dec!(200), dec!(50)));

        let report = Report::generate(&store, ReportKind::Customers, DateRange::unbounded());
        let Report::Customers(rows) = report else {
            panic!("expected customer report");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_orders, 2);
        assert_eq!(rows[0].total_weight, dec!(6.5));
        assert_eq!(rows[0].total_amount, dec!(700));
        assert_eq!(rows[0].amount_paid, dec!(550));
        assert_eq!(rows[0].outstanding_balance, dec!(150));
    }

    #[test]
    fn test_customer_report_filters_orders_by_date() {
        let store = DataStore::seeded();
        let range = DateRange::new(date("2025-01-16"), date("2025-01-31"));
        let report = Report::generate(&store, ReportKind::Customers, range);
        let Report::Customers(rows) = report else {
            panic!("expected customer report");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Zainab Khan");
    }

    #[test]
    fn test_transaction_report_resolves_missing_customer() {
        let mut store = DataStore::seeded();
        store.delete_customer("2");
        let report = Report::generate(&store, ReportKind::Transactions, DateRange::unbounded());
        let Report::Transactions(rows) = report else {
            panic!("expected transaction report");
        };
        assert_eq!(rows[0].customer, "Hassan Ahmed");
        assert_eq!(rows[1].customer, "Unknown");
        assert_eq!(rows[1].order_id, "2");
        assert_eq!(rows[1].status, TransactionStatus::Pending);
    }

    #[test]
    fn test_salary_report_filter_and_names() {
        let mut store = DataStore::seeded();
        store.add_salary_payment(SalaryPayment {
            employee_id: "gone".into(),
            amount: dec!(100),
            payment_date: date("2025-02-01"),
        });

        let all = Report::generate(&store, ReportKind::Salaries, DateRange::unbounded());
        assert_eq!(all.len(), 2);
        assert_eq!(all.kind(), ReportKind::Salaries);

        let range = DateRange::new(date("2025-02-01"), date("2025-02-28"));
        let Report::Salaries(rows) = Report::generate(&store, ReportKind::Salaries, range) else {
            panic!("expected salary report");
        };
        assert_eq!(
            rows,
            vec![SalaryReportRow {
                employee: "Unknown".into(),
                amount: dec!(100),
                payment_date: date("2025-02-01"),
            }]
        );
    }

    #[test]
    fn test_range_with_no_matches_is_empty() {
        let store = DataStore::seeded();
        let range = DateRange::new(date("2030-01-01"), date("2030-12-31"));
        for kind in ReportKind::ALL {
            assert!(Report::generate(&store, kind, range).is_empty());
        }
    }
}
