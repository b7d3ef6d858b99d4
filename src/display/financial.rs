//! Tables for receivables, payables and payroll entries

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_currency, format_date, truncate};
use crate::models::{Payable, PayrollEntry, Receivable};

#[derive(Tabled)]
struct ReceivableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Cliente")]
    client: String,
    #[tabled(rename = "Competência")]
    period: String,
    #[tabled(rename = "Vencimento")]
    due: String,
    #[tabled(rename = "Valor")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Pago em")]
    paid_on: String,
}

#[derive(Tabled)]
struct PayableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fornecedor")]
    supplier: String,
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Centro de custo")]
    cost_center: String,
    #[tabled(rename = "Vencimento")]
    due: String,
    #[tabled(rename = "Valor")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct PayrollRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Colaborador")]
    employee: String,
    #[tabled(rename = "Competência")]
    period: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Benefícios")]
    benefits: String,
    #[tabled(rename = "Descontos")]
    deductions: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn render<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty);
    }
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

pub fn format_receivable_list(receivables: &[Receivable]) -> String {
    let rows = receivables
        .iter()
        .map(|r| ReceivableRow {
            id: r.id.to_string(),
            client: truncate(&r.client_name, 28),
            period: r.period.to_string(),
            due: format_date(Some(r.due_date)),
            amount: format_currency(r.amount),
            status: r.status.to_string(),
            paid_on: format_date(r.paid_on),
        })
        .collect();
    render(rows, "No receivables found.")
}

pub fn format_payable_list(payables: &[Payable]) -> String {
    let rows = payables
        .iter()
        .map(|p| PayableRow {
            id: p.id.to_string(),
            supplier: truncate(&p.supplier, 28),
            category: p.category.clone(),
            cost_center: p.cost_center_name.clone(),
            due: format_date(Some(p.due_date)),
            amount: format_currency(p.amount),
            status: p.status.to_string(),
        })
        .collect();
    render(rows, "No payables found.")
}

pub fn format_payroll_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a PayrollEntry>,
{
    let rows = entries
        .into_iter()
        .map(|e| PayrollRow {
            id: e.id.to_string(),
            employee: truncate(&e.employee_name, 28),
            period: e.period.to_string(),
            base: format_currency(e.base_salary),
            benefits: format_currency(e.benefits),
            deductions: format_currency(e.deductions),
            total: format_currency(e.total),
            status: e.status.to_string(),
        })
        .collect();
    render(rows, "No payroll entries found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    #[test]
    fn test_receivable_list() {
        let output = format_receivable_list(&seed::receivables());
        assert!(output.contains("rec-00000001"));
        assert!(output.contains("Tech Solutions LTDA"));
        assert!(output.contains("PAGO"));
    }

    #[test]
    fn test_payable_list() {
        let output = format_payable_list(&seed::payables());
        assert!(output.contains("AWS Services"));
        assert!(output.contains("TI"));
    }

    #[test]
    fn test_payroll_list() {
        let payroll = seed::payroll();
        let output = format_payroll_list(&payroll);
        assert!(output.contains("Ana Silva"));
        assert!(output.contains("2023-10"));

        assert_eq!(format_payroll_list(&[]), "No payroll entries found.\n");
    }
}
