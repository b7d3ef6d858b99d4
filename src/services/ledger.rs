//! The ledger: single owner of every collection
//!
//! Mutations never edit a collection in place. Each one builds the next
//! version of the collection, swaps it in, then writes it through the
//! storage adapter. Operations are split across `registry`, `financial` and
//! `payroll`; this module holds the state, loading and the shared helpers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ContaproResult;
use crate::models::{
    Bank, BankId, Client, ClientId, CostCenter, CostCenterId, Employee, EmployeeId, EntityId,
    Payable, PayableId, PayrollEntry, PayrollEntryId, Receivable, ReceivableId, Supplier,
    SupplierId,
};
use crate::storage::{seed, Collection, Storage};

/// Records the ledger stores by id
pub trait Keyed: Clone {
    type Id: EntityId;

    fn key(&self) -> Self::Id;
}

macro_rules! keyed {
    ($entity:ty, $id:ty) => {
        impl Keyed for $entity {
            type Id = $id;

            fn key(&self) -> $id {
                self.id
            }
        }
    };
}

keyed!(Client, ClientId);
keyed!(Employee, EmployeeId);
keyed!(Supplier, SupplierId);
keyed!(Bank, BankId);
keyed!(CostCenter, CostCenterId);
keyed!(Receivable, ReceivableId);
keyed!(Payable, PayableId);
keyed!(PayrollEntry, PayrollEntryId);

/// Read-only view of every collection, for reports and encoders
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub clients: &'a [Client],
    pub employees: &'a [Employee],
    pub suppliers: &'a [Supplier],
    pub banks: &'a [Bank],
    pub cost_centers: &'a [CostCenter],
    pub receivables: &'a [Receivable],
    pub payables: &'a [Payable],
    pub payroll: &'a [PayrollEntry],
}

/// The bookkeeping ledger
#[derive(Debug)]
pub struct Ledger {
    storage: Storage,
    pub(super) clients: Vec<Client>,
    pub(super) employees: Vec<Employee>,
    pub(super) suppliers: Vec<Supplier>,
    pub(super) banks: Vec<Bank>,
    pub(super) cost_centers: Vec<CostCenter>,
    pub(super) receivables: Vec<Receivable>,
    pub(super) payables: Vec<Payable>,
    pub(super) payroll: Vec<PayrollEntry>,
}

impl Ledger {
    /// Load every collection, falling back to seed data per collection
    pub fn load(storage: Storage) -> Self {
        let ledger = Self {
            clients: storage.load(Collection::Clients, seed::clients),
            employees: storage.load(Collection::Employees, seed::employees),
            suppliers: storage.load(Collection::Suppliers, seed::suppliers),
            banks: storage.load(Collection::Banks, seed::banks),
            cost_centers: seed::cost_centers(),
            receivables: storage.load(Collection::Receivables, seed::receivables),
            payables: storage.load(Collection::Payables, seed::payables),
            payroll: storage.load(Collection::Payroll, seed::payroll),
            storage,
        };

        tracing::debug!(
            clients = ledger.clients.len(),
            employees = ledger.employees.len(),
            receivables = ledger.receivables.len(),
            payables = ledger.payables.len(),
            payroll = ledger.payroll.len(),
            "ledger loaded"
        );

        ledger
    }

    /// An empty ledger with nothing seeded, backed by `storage`
    pub fn empty(storage: Storage) -> Self {
        Self {
            storage,
            clients: Vec::new(),
            employees: Vec::new(),
            suppliers: Vec::new(),
            banks: Vec::new(),
            cost_centers: seed::cost_centers(),
            receivables: Vec::new(),
            payables: Vec::new(),
            payroll: Vec::new(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// Reference list of cost centers
    pub fn cost_centers(&self) -> &[CostCenter] {
        &self.cost_centers
    }

    pub fn receivables(&self) -> &[Receivable] {
        &self.receivables
    }

    pub fn payables(&self) -> &[Payable] {
        &self.payables
    }

    pub fn payroll(&self) -> &[PayrollEntry] {
        &self.payroll
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            clients: &self.clients,
            employees: &self.employees,
            suppliers: &self.suppliers,
            banks: &self.banks,
            cost_centers: &self.cost_centers,
            receivables: &self.receivables,
            payables: &self.payables,
            payroll: &self.payroll,
        }
    }

    /// Write every collection, e.g. to materialize seed data on first run
    pub fn save_all(&self) -> ContaproResult<()> {
        self.persist(Collection::Clients, &self.clients)?;
        self.persist(Collection::Employees, &self.employees)?;
        self.persist(Collection::Suppliers, &self.suppliers)?;
        self.persist(Collection::Banks, &self.banks)?;
        self.persist(Collection::Receivables, &self.receivables)?;
        self.persist(Collection::Payables, &self.payables)?;
        self.persist(Collection::Payroll, &self.payroll)
    }

    pub(super) fn persist<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> ContaproResult<()> {
        self.storage.save(collection, items)
    }
}

/// Look a record up by a user-typed reference (full or short id)
///
/// A reference that matches more than one record resolves to nothing.
pub fn find_by_ref<'a, T: Keyed>(items: &'a [T], reference: &str) -> Option<&'a T> {
    let mut matches = items.iter().filter(|item| item.key().matches_ref(reference));
    let first = matches.next()?;
    let others = matches.count();
    if others > 0 {
        tracing::warn!(
            reference,
            candidates = others + 1,
            "ambiguous reference, use a longer id"
        );
        return None;
    }
    Some(first)
}

pub(super) fn find<T: Keyed>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.key() == id)
}

pub(super) fn contains<T: Keyed>(items: &[T], id: T::Id) -> bool {
    items.iter().any(|item| item.key() == id)
}

/// New collection with `item` at the front
pub(super) fn prepended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next
}

/// New collection with the record sharing `item`'s id replaced, or `None`
/// when no such record exists
pub(super) fn replaced<T: Keyed>(items: &[T], item: T) -> Option<Vec<T>> {
    let position = items.iter().position(|existing| existing.key() == item.key())?;
    let mut next = items.to_vec();
    next[position] = item;
    Some(next)
}

/// New collection without the record `id`, or `None` when it is absent
pub(super) fn without<T: Keyed>(items: &[T], id: T::Id) -> Option<Vec<T>> {
    if !contains(items, id) {
        return None;
    }
    Some(items.iter().filter(|item| item.key() != id).cloned().collect())
}

pub(super) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
