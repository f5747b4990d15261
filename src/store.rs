//! The [`DataStore`]: session state and the four entity collections.
//!
//! Every collection mutation bumps a generation counter that keys the
//! metrics cache, then notifies subscribers if a record actually changed.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::metrics::{Metrics, MetricsCache};
use crate::model::{Admin, Customer, Employee, SalaryPayment, Transaction};
use crate::seed::Seed;
use crate::stores::{Collection, IdGenerator, Session};

/// Display value for a reference whose target no longer exists.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Employees,
    Customers,
    Transactions,
    SalaryPayments,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Employees => f.write_str("employees"),
            CollectionKind::Customers => f.write_str("customers"),
            CollectionKind::Transactions => f.write_str("transactions"),
            CollectionKind::SalaryPayments => f.write_str("salary_payments"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}

/// Sent to subscribers after a mutation that changed a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub collection: CollectionKind,
    pub change: ChangeKind,
    pub id: String,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Single source of truth for session and entity state.
///
/// Mutations never fail. Updating or deleting an id that is not present
/// leaves the collection as it was and signals nothing. References between
/// entities are not enforced: deleting a customer or employee leaves their
/// transactions and payments in place, see [`DataStore::customer_name`].
pub struct DataStore {
    session: Session,
    employees: Collection<Employee>,
    customers: Collection<Customer>,
    transactions: Collection<Transaction>,
    salary_payments: Collection<SalaryPayment>,
    ids: IdGenerator,
    /// Bumped by every collection mutation, matched or not.
    generation: u64,
    metrics: MetricsCache,
    listeners: Vec<Listener>,
}

impl DataStore {
    pub fn new(seed: Seed) -> Self {
        Self {
            session: Session::new(seed.admins),
            employees: seed.employees.into_iter().collect(),
            customers: seed.customers.into_iter().collect(),
            transactions: seed.transactions.into_iter().collect(),
            salary_payments: seed.salary_payments.into_iter().collect(),
            ids: IdGenerator::new(),
            generation: 0,
            metrics: MetricsCache::new(),
            listeners: Vec::new(),
        }
    }

    /// A store populated with the standard fixtures.
    pub fn seeded() -> Self {
        Self::new(Seed::default())
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let ok = self.session.login(username, password);
        if ok {
            info!(username, "admin logged in");
        } else {
            warn!(username, "login rejected");
        }
        ok
    }

    pub fn logout(&mut self) {
        if let Some(admin) = self.session.current_admin() {
            info!(username = %admin.username, "admin logged out");
        }
        self.session.logout();
    }

    pub fn current_admin(&self) -> Option<&Admin> {
        self.session.current_admin()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn employees(&self) -> &Collection<Employee> {
        &self.employees
    }

    pub fn customers(&self) -> &Collection<Customer> {
        &self.customers
    }

    pub fn transactions(&self) -> &Collection<Transaction> {
        &self.transactions
    }

    pub fn salary_payments(&self) -> &Collection<SalaryPayment> {
        &self.salary_payments
    }

    pub fn add_employee(&mut self, employee: Employee) -> String {
        let id = self.ids.next_id();
        self.employees.insert(id.clone(), employee);
        self.record_change(CollectionKind::Employees, ChangeKind::Added, &id, true);
        id
    }

    pub fn update_employee(&mut self, id: &str, employee: Employee) {
        let found = self.employees.replace(id, employee);
        self.record_change(CollectionKind::Employees, ChangeKind::Updated, id, found);
    }

    pub fn delete_employee(&mut self, id: &str) {
        let found = self.employees.remove(id);
        self.record_change(CollectionKind::Employees, ChangeKind::Deleted, id, found);
    }

    pub fn add_customer(&mut self, customer: Customer) -> String {
        let id = self.ids.next_id();
        self.customers.insert(id.clone(), customer);
        self.record_change(CollectionKind::Customers, ChangeKind::Added, &id, true);
        id
    }

    pub fn update_customer(&mut self, id: &str, customer: Customer) {
        let found = self.customers.replace(id, customer);
        self.record_change(CollectionKind::Customers, ChangeKind::Updated, id, found);
    }

    pub fn delete_customer(&mut self, id: &str) {
        let found = self.customers.remove(id);
        self.record_change(CollectionKind::Customers, ChangeKind::Deleted, id, found);
    }

    /// Stores the transaction as given; `balance` is not recomputed and the
    /// customer's order count is not touched.
    pub fn add_transaction(&mut self, transaction: Transaction) -> String {
        let id = self.ids.next_id();
        self.transactions.insert(id.clone(), transaction);
        self.record_change(CollectionKind::Transactions, ChangeKind::Added, &id, true);
        id
    }

    pub fn update_transaction(&mut self, id: &str, transaction: Transaction) {
        let found = self.transactions.replace(id, transaction);
        self.record_change(CollectionKind::Transactions, ChangeKind::Updated, id, found);
    }

    pub fn delete_transaction(&mut self, id: &str) {
        let found = self.transactions.remove(id);
        self.record_change(CollectionKind::Transactions, ChangeKind::Deleted, id, found);
    }

    pub fn add_salary_payment(&mut self, payment: SalaryPayment) -> String {
        let id = self.ids.next_id();
        self.salary_payments.insert(id.clone(), payment);
        self.record_change(CollectionKind::SalaryPayments, ChangeKind::Added, &id, true);
        id
    }

    pub fn update_salary_payment(&mut self, id: &str, payment: SalaryPayment) {
        let found = self.salary_payments.replace(id, payment);
        self.record_change(CollectionKind::SalaryPayments, ChangeKind::Updated, id, found);
    }

    pub fn delete_salary_payment(&mut self, id: &str) {
        let found = self.salary_payments.remove(id);
        self.record_change(CollectionKind::SalaryPayments, ChangeKind::Deleted, id, found);
    }

    /// Dashboard aggregates, recomputed only after a mutation.
    pub fn metrics(&self) -> Rc<Metrics> {
        self.metrics.get_or_compute(self.generation, || {
            Metrics::compute(
                self.employees.len(),
                self.customers.len(),
                self.transactions.as_slice(),
            )
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Registers a listener called after every mutation that changed a collection.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Name of the referenced customer, or [`UNKNOWN_NAME`] if it was deleted.
    pub fn customer_name(&self, id: &str) -> &str {
        self.customers
            .get(id)
            .map_or(UNKNOWN_NAME, |c| c.name.as_str())
    }

    /// Name of the referenced employee, or [`UNKNOWN_NAME`] if it was deleted.
    pub fn employee_name(&self, id: &str) -> &str {
        self.employees
            .get(id)
            .map_or(UNKNOWN_NAME, |e| e.name.as_str())
    }

    fn record_change(
        &mut self,
        collection: CollectionKind,
        change: ChangeKind,
        id: &str,
        found: bool,
    ) {
        self.generation += 1;
        debug!(%collection, ?change, id, found, generation = self.generation, "store mutation");
        if !found {
            return;
        }
        let event = StoreEvent {
            collection,
            change,
            id: id.to_owned(),
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::seeded()
    }
}
