//! Receivables, payables and settlement
//!
//! Settling a record credits (receivable) or debits (payable) the bank it
//! points at, exactly once: a record that is already PAGO is left alone.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::ledger::{contains, find, find_by_ref, prepended, replaced, today, without, Ledger};
use super::registry::find_named;
use crate::error::{ContaproError, ContaproResult};
use crate::models::{
    BankId, CostCenter, Money, Payable, PayableId, PayableStatus, Receivable, ReceivableId,
    ReceivableStatus,
};
use crate::storage::Collection;

/// Which side of the ledger a payment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Receivable,
    Payable,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receivable => write!(f, "receivable"),
            Self::Payable => write!(f, "payable"),
        }
    }
}

impl FromStr for PaymentKind {
    type Err = ContaproError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rec" | "receivable" | "receber" => Ok(Self::Receivable),
            "pay" | "payable" | "pagar" => Ok(Self::Payable),
            other => Err(ContaproError::Validation(format!(
                "Unknown payment kind '{}'. Use 'rec' or 'pay'",
                other
            ))),
        }
    }
}

/// Outcome of a settlement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// False when the record was already PAGO
    pub newly_paid: bool,
    pub paid_on: Option<NaiveDate>,
    /// Bank whose balance moved, and by how much
    pub bank_adjustment: Option<(BankId, Money)>,
}

impl Ledger {
    // Receivables

    pub fn add_receivable(&mut self, receivable: Receivable) -> ContaproResult<Receivable> {
        receivable.validate()?;
        if contains(&self.receivables, receivable.id) {
            return Err(ContaproError::Duplicate {
                entity_type: "Receivable",
                identifier: receivable.id.to_string(),
            });
        }

        self.receivables = prepended(&self.receivables, receivable.clone());
        self.persist(Collection::Receivables, &self.receivables)?;
        Ok(receivable)
    }

    pub fn remove_receivable(&mut self, id: ReceivableId) -> ContaproResult<bool> {
        match without(&self.receivables, id) {
            Some(next) => {
                self.receivables = next;
                self.persist(Collection::Receivables, &self.receivables)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_receivable(&self, reference: &str) -> Option<&Receivable> {
        find_by_ref(&self.receivables, reference)
    }

    // Payables

    pub fn add_payable(&mut self, payable: Payable) -> ContaproResult<Payable> {
        payable.validate()?;
        if contains(&self.payables, payable.id) {
            return Err(ContaproError::Duplicate {
                entity_type: "Payable",
                identifier: payable.id.to_string(),
            });
        }

        self.payables = prepended(&self.payables, payable.clone());
        self.persist(Collection::Payables, &self.payables)?;
        Ok(payable)
    }

    pub fn remove_payable(&mut self, id: PayableId) -> ContaproResult<bool> {
        match without(&self.payables, id) {
            Some(next) => {
                self.payables = next;
                self.persist(Collection::Payables, &self.payables)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_payable(&self, reference: &str) -> Option<&Payable> {
        find_by_ref(&self.payables, reference)
    }

    pub fn find_cost_center(&self, reference: &str) -> Option<&CostCenter> {
        find_named(&self.cost_centers, reference, |c| &c.name)
    }

    // Settlement

    /// Mark a receivable or payable as paid today
    pub fn mark_as_paid(&mut self, kind: PaymentKind, reference: &str) -> ContaproResult<Settlement> {
        self.mark_as_paid_on(kind, reference, today())
    }

    /// Mark a receivable or payable as paid on `date`
    pub fn mark_as_paid_on(
        &mut self,
        kind: PaymentKind,
        reference: &str,
        date: NaiveDate,
    ) -> ContaproResult<Settlement> {
        match kind {
            PaymentKind::Receivable => {
                let id = self
                    .find_receivable(reference)
                    .map(|r| r.id)
                    .ok_or_else(|| ContaproError::receivable_not_found(reference))?;
                self.settle_receivable(id, date)
            }
            PaymentKind::Payable => {
                let id = self
                    .find_payable(reference)
                    .map(|p| p.id)
                    .ok_or_else(|| ContaproError::payable_not_found(reference))?;
                self.settle_payable(id, date)
            }
        }
    }

    pub fn settle_receivable(&mut self, id: ReceivableId, date: NaiveDate) -> ContaproResult<Settlement> {
        let current = find(&self.receivables, id)
            .ok_or_else(|| ContaproError::receivable_not_found(id.to_string()))?;

        if current.is_paid() {
            tracing::debug!(%id, "receivable already paid, nothing to do");
            return Ok(Settlement {
                newly_paid: false,
                paid_on: current.paid_on,
                bank_adjustment: None,
            });
        }

        let mut paid = current.clone();
        paid.status = ReceivableStatus::Pago;
        paid.paid_on = Some(date);
        let (bank_id, amount) = (paid.bank_id, paid.amount);

        if let Some(next) = replaced(&self.receivables, paid) {
            self.receivables = next;
        }
        let adjustment = self.adjust_bank(bank_id, amount);
        tracing::info!(%id, %amount, %date, "receivable paid");

        self.persist_settlement(Collection::Receivables, adjustment.is_some())?;
        Ok(Settlement {
            newly_paid: true,
            paid_on: Some(date),
            bank_adjustment: adjustment,
        })
    }

    pub fn settle_payable(&mut self, id: PayableId, date: NaiveDate) -> ContaproResult<Settlement> {
        let current = find(&self.payables, id)
            .ok_or_else(|| ContaproError::payable_not_found(id.to_string()))?;

        if current.is_paid() {
            tracing::debug!(%id, "payable already paid, nothing to do");
            return Ok(Settlement {
                newly_paid: false,
                paid_on: current.paid_on,
                bank_adjustment: None,
            });
        }

        let mut paid = current.clone();
        paid.status = PayableStatus::Pago;
        paid.paid_on = Some(date);
        let (bank_id, amount) = (paid.bank_id, paid.amount);

        if let Some(next) = replaced(&self.payables, paid) {
            self.payables = next;
        }
        let adjustment = self.adjust_bank(bank_id, -amount);
        tracing::info!(%id, %amount, %date, "payable paid");

        self.persist_settlement(Collection::Payables, adjustment.is_some())?;
        Ok(Settlement {
            newly_paid: true,
            paid_on: Some(date),
            bank_adjustment: adjustment,
        })
    }

    /// Move a bank balance by `delta`; a reference to a missing bank is
    /// logged and skipped
    fn adjust_bank(&mut self, bank_id: Option<BankId>, delta: Money) -> Option<(BankId, Money)> {
        let bank_id = bank_id?;
        let Some(bank) = find(&self.banks, bank_id) else {
            tracing::warn!(%bank_id, "payment references an unknown bank, balance not adjusted");
            return None;
        };

        let mut bank = bank.clone();
        bank.balance += delta;
        self.banks = replaced(&self.banks, bank)?;
        Some((bank_id, delta))
    }

    /// Write the settled collection and, if it moved, the banks; both writes
    /// are attempted before the first failure is reported
    fn persist_settlement(&self, collection: Collection, banks_changed: bool) -> ContaproResult<()> {
        let saved = match collection {
            Collection::Receivables => self.persist(collection, &self.receivables),
            _ => self.persist(collection, &self.payables),
        };
        let banks_saved = if banks_changed {
            self.persist(Collection::Banks, &self.banks)
        } else {
            Ok(())
        };
        saved.and(banks_saved)
    }

    /// Flag PENDENTE receivables and payables due before `today` as ATRASADO
    ///
    /// Returns how many records changed.
    pub fn refresh_overdue(&mut self, today: NaiveDate) -> ContaproResult<usize> {
        let overdue_receivables = self.receivables.iter().filter(|r| r.is_overdue(today)).count();
        let overdue_payables = self.payables.iter().filter(|p| p.is_overdue(today)).count();

        if overdue_receivables > 0 {
            self.receivables = self
                .receivables
                .iter()
                .cloned()
                .map(|mut r| {
                    if r.is_overdue(today) {
                        r.status = ReceivableStatus::Atrasado;
                    }
                    r
                })
                .collect();
        }

        if overdue_payables > 0 {
            self.payables = self
                .payables
                .iter()
                .cloned()
                .map(|mut p| {
                    if p.is_overdue(today) {
                        p.status = PayableStatus::Atrasado;
                    }
                    p
                })
                .collect();
        }

        let saved = if overdue_receivables > 0 {
            self.persist(Collection::Receivables, &self.receivables)
        } else {
            Ok(())
        };
        let payables_saved = if overdue_payables > 0 {
            self.persist(Collection::Payables, &self.payables)
        } else {
            Ok(())
        };
        saved.and(payables_saved)?;

        let changed = overdue_receivables + overdue_payables;
        if changed > 0 {
            tracing::info!(receivables = overdue_receivables, payables = overdue_payables, "overdue records flagged");
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccrualPeriod, Bank, ClientId};
    use crate::storage::test_support::UnavailableStore;
    use crate::storage::{PersistencePolicy, Storage};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One Sicoob bank with R$ 1.000,00 and one pending R$ 800,00 receivable
    /// pointing at it
    fn scenario() -> (Ledger, Receivable, BankId) {
        let mut ledger = Ledger::empty(Storage::in_memory());
        let bank = ledger.add_bank(Bank::new("Sicoob", Money::from_reais(1000))).unwrap();
        let receivable = Receivable::new(
            ClientId::new(),
            "Padaria do João",
            AccrualPeriod::parse("2023-10").unwrap(),
            date(2023, 10, 15),
            Money::from_reais(800),
        )
        .with_bank(bank.id);
        let receivable = ledger.add_receivable(receivable).unwrap();
        (ledger, receivable, bank.id)
    }

    fn balance(ledger: &Ledger, id: BankId) -> Money {
        ledger.banks().iter().find(|b| b.id == id).unwrap().balance
    }

    #[test]
    fn test_mark_receivable_paid_credits_bank_once() {
        let (mut ledger, receivable, bank_id) = scenario();
        let reference = receivable.id.to_string();

        let settlement = ledger.mark_as_paid("rec".parse().unwrap(), &reference).unwrap();
        assert!(settlement.newly_paid);
        assert_eq!(settlement.bank_adjustment, Some((bank_id, Money::from_reais(800))));

        let paid = &ledger.receivables()[0];
        assert_eq!(paid.status, ReceivableStatus::Pago);
        assert_eq!(paid.paid_on, Some(chrono::Local::now().date_naive()));
        assert_eq!(balance(&ledger, bank_id), Money::from_reais(1800));

        let again = ledger.mark_as_paid(PaymentKind::Receivable, &reference).unwrap();
        assert!(!again.newly_paid);
        assert_eq!(balance(&ledger, bank_id), Money::from_reais(1800));
    }

    #[test]
    fn test_mark_payable_paid_debits_bank() {
        let mut ledger = Ledger::empty(Storage::in_memory());
        let bank = ledger.add_bank(Bank::new("Oteropay", Money::from_reais(1000))).unwrap();
        let center = ledger.cost_centers()[3].clone();
        let payable = Payable::new("AWS Services", "Software", &center, date(2023, 11, 10), Money::from_cents(85050))
            .with_bank(bank.id);
        let payable = ledger.add_payable(payable).unwrap();

        ledger
            .mark_as_paid_on(PaymentKind::Payable, &payable.id.to_string(), date(2023, 11, 9))
            .unwrap();
        ledger
            .mark_as_paid_on(PaymentKind::Payable, &payable.id.to_string(), date(2023, 11, 10))
            .unwrap();

        assert_eq!(balance(&ledger, bank.id), Money::from_cents(14950));
        assert_eq!(ledger.payables()[0].paid_on, Some(date(2023, 11, 9)));
    }

    #[test]
    fn test_payment_without_bank_only_changes_status() {
        let mut ledger = Ledger::empty(Storage::in_memory());
        let receivable = ledger
            .add_receivable(Receivable::new(
                ClientId::new(),
                "Consultoria Aguiar",
                AccrualPeriod::parse("2023-11").unwrap(),
                date(2023, 11, 15),
                Money::from_reais(1200),
            ))
            .unwrap();

        let settlement = ledger
            .settle_receivable(receivable.id, date(2023, 11, 15))
            .unwrap();
        assert!(settlement.newly_paid);
        assert!(settlement.bank_adjustment.is_none());
    }

    #[test]
    fn test_dangling_bank_reference_is_skipped() {
        let (mut ledger, receivable, bank_id) = scenario();
        ledger.remove_bank(bank_id).unwrap();

        let settlement = ledger.settle_receivable(receivable.id, date(2023, 10, 14)).unwrap();
        assert!(settlement.newly_paid);
        assert!(settlement.bank_adjustment.is_none());
        assert_eq!(ledger.receivables()[0].status, ReceivableStatus::Pago);
    }

    #[test]
    fn test_unknown_reference_is_not_found() {
        let (mut ledger, _, _) = scenario();
        let err = ledger.mark_as_paid(PaymentKind::Payable, "pay-00000000").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_payment_kind_aliases() {
        assert_eq!("rec".parse::<PaymentKind>().unwrap(), PaymentKind::Receivable);
        assert_eq!("PAY".parse::<PaymentKind>().unwrap(), PaymentKind::Payable);
        assert!("refund".parse::<PaymentKind>().is_err());
    }

    #[test]
    fn test_refresh_overdue() {
        let mut ledger = Ledger::load(Storage::in_memory());
        let changed = ledger.refresh_overdue(date(2023, 11, 8)).unwrap();

        // Aluguel (11-01) and Google (11-05); receivables due 11-15 are still on time
        assert_eq!(changed, 2);
        let late: Vec<&str> = ledger
            .payables()
            .iter()
            .filter(|p| p.status == PayableStatus::Atrasado)
            .map(|p| p.supplier.as_str())
            .collect();
        assert_eq!(late, vec!["Google Workspace", "Aluguel Sala"]);

        assert_eq!(ledger.refresh_overdue(date(2023, 11, 8)).unwrap(), 0);
    }

    #[test]
    fn test_add_receivable_validates_before_mutation() {
        let mut ledger = Ledger::empty(Storage::in_memory());
        let mut receivable = Receivable::new(
            ClientId::new(),
            "Tech Solutions LTDA",
            AccrualPeriod::parse("2023-11").unwrap(),
            date(2023, 11, 15),
            Money::from_reais(2500),
        );
        receivable.status = ReceivableStatus::Pago;

        assert!(ledger.add_receivable(receivable).unwrap_err().is_validation());
        assert!(ledger.receivables().is_empty());
    }

    #[test]
    fn test_durable_policy_surfaces_failure_after_updating_memory() {
        let mut ledger = Ledger::empty(Storage::new(UnavailableStore, PersistencePolicy::Durable));
        let err = ledger.add_bank(Bank::new("Sicoob", Money::zero())).unwrap_err();
        assert!(matches!(err, ContaproError::Storage(_)));
        assert_eq!(ledger.banks().len(), 1);
    }

    #[test]
    fn test_best_effort_policy_keeps_working_in_memory() {
        let mut ledger = Ledger::load(Storage::new(UnavailableStore, PersistencePolicy::BestEffort));
        let reference = ledger.receivables()[2].id.to_string();
        let settlement = ledger.mark_as_paid(PaymentKind::Receivable, &reference).unwrap();
        assert!(settlement.newly_paid);
    }
}
