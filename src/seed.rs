//! Fixture data a [`DataStore`](crate::DataStore) starts from.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::{
    Admin, Customer, Employee, EmployeeStatus, Record, SalaryPayment, Transaction,
    TransactionStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub admins: Vec<Admin>,
    pub employees: Vec<Record<Employee>>,
    pub customers: Vec<Record<Customer>>,
    pub transactions: Vec<Record<Transaction>>,
    pub salary_payments: Vec<Record<SalaryPayment>>,
}

impl Seed {
    /// Only the admin accounts, with all entity collections empty.
    pub fn empty() -> Self {
        Self {
            admins: default_admins(),
            employees: Vec::new(),
            customers: Vec::new(),
            transactions: Vec::new(),
            salary_payments: Vec::new(),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            admins: default_admins(),
            employees: vec![
                Record::new(
                    "1",
                    Employee {
                        name: "Ahmad Khan".into(),
                        phone: "03001234567".into(),
                        role: "Manager".into(),
                        salary: Decimal::from(50_000),
                        address: "Karachi".into(),
                        status: EmployeeStatus::Active,
                    },
                ),
                Record::new(
                    "2",
                    Employee {
                        name: "Fatima Ali".into(),
                        phone: "03009876543".into(),
                        role: "Staff".into(),
                        salary: Decimal::from(25_000),
                        address: "Karachi".into(),
                        status: EmployeeStatus::Active,
                    },
                ),
            ],
            customers: vec![
                Record::new(
                    "1",
                    Customer {
                        name: "Hassan Ahmed".into(),
                        phone: "03101234567".into(),
                        address: "Clifton".into(),
                        total_transactions: 5,
                    },
                ),
                Record::new(
                    "2",
                    Customer {
                        name: "Zainab Khan".into(),
                        phone: "03109876543".into(),
                        address: "Defence".into(),
                        total_transactions: 3,
                    },
                ),
            ],
            transactions: vec![
                Record::new(
                    "1",
                    Transaction {
                        customer_id: "1".into(),
                        employee_id: "1".into(),
                        weight: Decimal::from(5),
                        order_date: ymd(2025, 1, 15),
                        collection_date: ymd(2025, 1, 17),
                        amount_to_pay: Decimal::from(500),
                        amount_paid: Decimal::from(500),
                        balance: Decimal::ZERO,
                        status: TransactionStatus::Completed,
                    },
                ),
                Record::new(
                    "2",
                    Transaction {
                        customer_id: "2".into(),
                        employee_id: "2".into(),
                        weight: Decimal::from(3),
                        order_date: ymd(2025, 1, 16),
                        collection_date: ymd(2025, 1, 18),
                        amount_to_pay: Decimal::from(300),
                        amount_paid: Decimal::ZERO,
                        balance: Decimal::from(300),
                        status: TransactionStatus::Pending,
                    },
                ),
            ],
            salary_payments: vec![Record::new(
                "1",
                SalaryPayment {
                    employee_id: "1".into(),
                    amount: Decimal::from(50_000),
                    payment_date: ymd(2025, 1, 1),
                },
            )],
        }
    }
}

fn default_admins() -> Vec<Admin> {
    vec![
        Admin {
            id: "1".into(),
            username: "admin".into(),
            password: "admin123".into(),
            name: "Admin User".into(),
        },
        Admin {
            id: "2".into(),
            username: "manager".into(),
            password: "manager123".into(),
            name: "Manager".into(),
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
