//! Client, supplier and bank registries
//!
//! Plain insert-at-front / replace-by-id / filter-out-by-id operations.
//! Removing a bank leaves any receivable or payable that points at it
//! untouched; the dangling reference is skipped at payment time.

use super::ledger::{contains, find_by_ref, prepended, replaced, without, Keyed, Ledger};
use crate::error::{ContaproError, ContaproResult};
use crate::models::{Bank, BankId, Client, ClientId, Supplier, SupplierId};
use crate::storage::Collection;

/// Match by exact name (case-insensitive) first, then by id reference
pub(super) fn find_named<'a, T: Keyed>(
    items: &'a [T],
    reference: &str,
    name: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let wanted = reference.trim().to_lowercase();
    items
        .iter()
        .find(|item| name(item).to_lowercase() == wanted)
        .or_else(|| find_by_ref(items, reference))
}

fn duplicate_id(entity_type: &'static str, id: impl ToString) -> ContaproError {
    ContaproError::Duplicate {
        entity_type,
        identifier: id.to_string(),
    }
}

impl Ledger {
    // Clients

    pub fn add_client(&mut self, client: Client) -> ContaproResult<Client> {
        client.validate()?;
        if contains(&self.clients, client.id) {
            return Err(duplicate_id("Client", client.id));
        }

        self.clients = prepended(&self.clients, client.clone());
        self.persist(Collection::Clients, &self.clients)?;
        Ok(client)
    }

    pub fn update_client(&mut self, client: Client) -> ContaproResult<()> {
        client.validate()?;
        let id = client.id;
        self.clients = replaced(&self.clients, client)
            .ok_or_else(|| ContaproError::client_not_found(id.to_string()))?;
        self.persist(Collection::Clients, &self.clients)
    }

    /// Remove a client; existing receivables keep their name snapshot
    pub fn remove_client(&mut self, id: ClientId) -> ContaproResult<bool> {
        match without(&self.clients, id) {
            Some(next) => {
                self.clients = next;
                self.persist(Collection::Clients, &self.clients)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_client(&self, reference: &str) -> Option<&Client> {
        find_named(&self.clients, reference, |c| &c.name)
    }

    // Suppliers

    pub fn add_supplier(&mut self, supplier: Supplier) -> ContaproResult<Supplier> {
        supplier.validate()?;
        if contains(&self.suppliers, supplier.id) {
            return Err(duplicate_id("Supplier", supplier.id));
        }

        self.suppliers = prepended(&self.suppliers, supplier.clone());
        self.persist(Collection::Suppliers, &self.suppliers)?;
        Ok(supplier)
    }

    pub fn update_supplier(&mut self, supplier: Supplier) -> ContaproResult<()> {
        supplier.validate()?;
        let id = supplier.id;
        self.suppliers = replaced(&self.suppliers, supplier)
            .ok_or_else(|| ContaproError::supplier_not_found(id.to_string()))?;
        self.persist(Collection::Suppliers, &self.suppliers)
    }

    pub fn remove_supplier(&mut self, id: SupplierId) -> ContaproResult<bool> {
        match without(&self.suppliers, id) {
            Some(next) => {
                self.suppliers = next;
                self.persist(Collection::Suppliers, &self.suppliers)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_supplier(&self, reference: &str) -> Option<&Supplier> {
        find_named(&self.suppliers, reference, |s| &s.name)
    }

    // Banks

    pub fn add_bank(&mut self, bank: Bank) -> ContaproResult<Bank> {
        bank.validate()?;
        if contains(&self.banks, bank.id) {
            return Err(duplicate_id("Bank", bank.id));
        }

        self.banks = prepended(&self.banks, bank.clone());
        self.persist(Collection::Banks, &self.banks)?;
        Ok(bank)
    }

    pub fn update_bank(&mut self, bank: Bank) -> ContaproResult<()> {
        bank.validate()?;
        let id = bank.id;
        self.banks = replaced(&self.banks, bank)
            .ok_or_else(|| ContaproError::bank_not_found(id.to_string()))?;
        self.persist(Collection::Banks, &self.banks)
    }

    pub fn remove_bank(&mut self, id: BankId) -> ContaproResult<bool> {
        match without(&self.banks, id) {
            Some(next) => {
                self.banks = next;
                self.persist(Collection::Banks, &self.banks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_bank(&self, reference: &str) -> Option<&Bank> {
        find_named(&self.banks, reference, |b| &b.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Receivable, TaxRegime};
    use crate::storage::{Storage, MemoryStore, PersistencePolicy, KeyValueStore};
    use std::sync::Arc;

    fn ledger() -> Ledger {
        Ledger::empty(Storage::in_memory())
    }

    #[test]
    fn test_add_client_inserts_at_front() {
        let mut ledger = ledger();
        let first = ledger
            .add_client(Client::new("Tech Solutions LTDA", "12.345.678/0001-90", TaxRegime::LucroPresumido, Money::from_reais(2500)))
            .unwrap();
        let second = ledger
            .add_client(Client::new("Padaria do João", "98.765.432/0001-10", TaxRegime::SimplesNacional, Money::from_reais(800)))
            .unwrap();

        let ids: Vec<ClientId> = ledger.clients().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_add_client_rejects_invalid_input() {
        let mut ledger = ledger();
        let err = ledger
            .add_client(Client::new("  ", "", TaxRegime::SimplesNacional, Money::zero()))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.clients().is_empty());

        let err = ledger
            .add_client(Client::new("Aguiar", "", TaxRegime::SimplesNacional, Money::from_cents(-1)))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_client_rejects_duplicate_id() {
        let mut ledger = ledger();
        let client = Client::new("Aguiar", "", TaxRegime::SimplesNacional, Money::zero());
        ledger.add_client(client.clone()).unwrap();
        assert!(ledger.add_client(client).unwrap_err().is_duplicate());
    }

    #[test]
    fn test_update_unknown_client_is_not_found() {
        let mut ledger = ledger();
        let err = ledger
            .update_client(Client::new("Ghost", "", TaxRegime::LucroReal, Money::zero()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_renaming_client_keeps_receivable_snapshot() {
        let mut ledger = Ledger::load(Storage::in_memory());
        let mut client = ledger.clients()[0].clone();
        client.name = "Tech Solutions SA".into();
        ledger.update_client(client.clone()).unwrap();

        let labels: Vec<&str> = ledger
            .receivables()
            .iter()
            .filter(|r| r.client_id == client.id)
            .map(|r| r.client_name.as_str())
            .collect();
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|l| *l == "Tech Solutions LTDA"));
    }

    #[test]
    fn test_remove_reports_whether_anything_was_removed() {
        let mut ledger = ledger();
        let supplier = ledger.add_supplier(Supplier::new("AWS Services", "Software")).unwrap();
        assert!(ledger.remove_supplier(supplier.id).unwrap());
        assert!(!ledger.remove_supplier(supplier.id).unwrap());
        assert!(ledger.suppliers().is_empty());
    }

    #[test]
    fn test_removing_bank_keeps_references() {
        let mut ledger = Ledger::load(Storage::in_memory());
        let sicoob = crate::storage::seed::sicoob_id();
        assert!(ledger.remove_bank(sicoob).unwrap());
        assert!(ledger
            .receivables()
            .iter()
            .any(|r: &Receivable| r.bank_id == Some(sicoob)));
    }

    #[test]
    fn test_find_by_name_or_id() {
        let ledger = Ledger::load(Storage::in_memory());
        assert_eq!(ledger.find_bank("sicoob").map(|b| b.name.as_str()), Some("Sicoob"));
        let id = ledger.suppliers()[1].id.to_string();
        assert_eq!(
            ledger.find_supplier(&id).map(|s| s.name.as_str()),
            Some("Papelaria Central")
        );
        assert!(ledger.find_client("Nobody").is_none());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = Arc::new(MemoryStore::new());
        let mut ledger = Ledger::empty(Storage::new(store.clone(), PersistencePolicy::Durable));
        ledger.add_bank(Bank::new("Sicoob", Money::from_reais(1000))).unwrap();

        let raw = store.get("contapro_banks").unwrap().unwrap();
        assert!(raw.contains("\"Sicoob\""));
        assert!(raw.contains("100000"));
    }
}
