//! Collection reminders for pending orders.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::TransactionStatus;
use crate::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Overdue,
    DueToday,
    Upcoming,
}

impl CollectionStatus {
    pub fn classify(collection_date: NaiveDate, today: NaiveDate) -> Self {
        match collection_date.cmp(&today) {
            std::cmp::Ordering::Less => CollectionStatus::Overdue,
            std::cmp::Ordering::Equal => CollectionStatus::DueToday,
            std::cmp::Ordering::Greater => CollectionStatus::Upcoming,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionNotice {
    pub transaction_id: String,
    pub customer_name: String,
    pub collection_date: NaiveDate,
    pub balance: Decimal,
    pub status: CollectionStatus,
}

/// Pending transactions ordered by collection date, earliest first.
/// Transactions sharing a date keep their store order.
pub fn upcoming_collections(store: &DataStore, today: NaiveDate) -> Vec<CollectionNotice> {
    let mut notices: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| t.status == TransactionStatus::Pending)
        .map(|t| CollectionNotice {
            transaction_id: t.id.clone(),
            customer_name: store.customer_name(&t.customer_id).to_owned(),
            collection_date: t.collection_date,
            balance: t.balance,
            status: CollectionStatus::classify(t.collection_date, today),
        })
        .collect();
    notices.sort_by_key(|notice| notice.collection_date);
    notices
}
