//! Dashboard summary
//!
//! Headline figures across the whole ledger.

use serde::Serialize;

use crate::models::Money;
use crate::services::LedgerSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Sum of every receivable
    pub total_billed: Money,
    /// Sum of every payable
    pub total_expenses: Money,
    /// Receivables not yet PAGO
    pub outstanding: Money,
    pub delinquent_clients: usize,
    pub active_clients: usize,
    pub total_bank_balance: Money,
}

impl DashboardSummary {
    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>) -> Self {
        Self {
            total_billed: snapshot.receivables.iter().map(|r| r.amount).sum(),
            total_expenses: snapshot.payables.iter().map(|p| p.amount).sum(),
            outstanding: snapshot
                .receivables
                .iter()
                .filter(|r| !r.is_paid())
                .map(|r| r.amount)
                .sum(),
            delinquent_clients: snapshot.clients.iter().filter(|c| c.delinquent).count(),
            active_clients: snapshot.clients.iter().filter(|c| c.status.is_active()).count(),
            total_bank_balance: snapshot.banks.iter().map(|b| b.balance).sum(),
        }
    }

    pub fn format_terminal(&self) -> String {
        let rows = [
            ("Faturamento total", self.total_billed.to_string()),
            ("Despesas totais", self.total_expenses.to_string()),
            ("A receber", self.outstanding.to_string()),
            ("Saldo em bancos", self.total_bank_balance.to_string()),
            ("Clientes ativos", self.active_clients.to_string()),
            ("Clientes inadimplentes", self.delinquent_clients.to_string()),
        ];

        let mut output = String::from("Painel\n");
        output.push_str(&"=".repeat(42));
        output.push('\n');
        for (label, value) in rows {
            output.push_str(&format!("{:<24}{:>18}\n", label, value));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Ledger;
    use crate::storage::Storage;

    #[test]
    fn test_seed_dashboard() {
        let ledger = Ledger::load(Storage::in_memory());
        let summary = DashboardSummary::from_snapshot(&ledger.snapshot());

        assert_eq!(summary.total_billed, Money::from_reais(8500));
        assert_eq!(summary.total_expenses, Money::from_cents(473_050));
        // Padaria 800 + Aguiar 1200 + Tech 2500
        assert_eq!(summary.outstanding, Money::from_reais(4500));
        assert_eq!(summary.delinquent_clients, 1);
        assert_eq!(summary.active_clients, 4);
        assert_eq!(summary.total_bank_balance, Money::from_reais(23_000));
    }

    #[test]
    fn test_empty_dashboard() {
        let ledger = Ledger::empty(Storage::in_memory());
        let summary = DashboardSummary::from_snapshot(&ledger.snapshot());
        assert!(summary.total_billed.is_zero());
        assert_eq!(summary.delinquent_clients, 0);
        assert!(summary.format_terminal().contains("R$ 0,00"));
    }
}
