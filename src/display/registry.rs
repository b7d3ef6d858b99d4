//! Tables for clients, employees, suppliers and banks

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::format_currency;
use crate::models::{Bank, Client, Employee, Supplier};

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "CNPJ")]
    tax_id: String,
    #[tabled(rename = "Regime")]
    regime: String,
    #[tabled(rename = "Honorário")]
    fee: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Cargo")]
    role: String,
    #[tabled(rename = "Contrato")]
    contract: String,
    #[tabled(rename = "Salário")]
    salary: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct SupplierRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Contato")]
    contact: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct BankRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Banco")]
    name: String,
    #[tabled(rename = "Agência")]
    branch: String,
    #[tabled(rename = "Conta")]
    account: String,
    #[tabled(rename = "Saldo")]
    balance: String,
}

fn render<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty);
    }
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

pub fn format_client_list(clients: &[Client]) -> String {
    let rows = clients
        .iter()
        .map(|c| ClientRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            tax_id: c.tax_id.clone(),
            regime: c.tax_regime.to_string(),
            fee: format_currency(c.monthly_fee),
            status: if c.delinquent {
                format!("{} (inadimplente)", c.status)
            } else {
                c.status.to_string()
            },
        })
        .collect();
    render(rows, "No clients found.")
}

pub fn format_employee_list(employees: &[Employee]) -> String {
    let rows = employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id.to_string(),
            name: e.name.clone(),
            role: e.role.clone(),
            contract: e.contract_type.to_string(),
            salary: format_currency(e.base_salary),
            status: e.status.to_string(),
        })
        .collect();
    render(rows, "No employees found.")
}

pub fn format_supplier_list(suppliers: &[Supplier]) -> String {
    let rows = suppliers
        .iter()
        .map(|s| SupplierRow {
            id: s.id.to_string(),
            name: s.name.clone(),
            category: s.category.clone(),
            contact: s.contact.clone(),
            status: s.status.to_string(),
        })
        .collect();
    render(rows, "No suppliers found.")
}

/// Bank table with a total balance line
pub fn format_bank_list(banks: &[Bank]) -> String {
    let rows = banks
        .iter()
        .map(|b| BankRow {
            id: b.id.to_string(),
            name: b.name.clone(),
            branch: b.branch.clone(),
            account: b.account.clone(),
            balance: format_currency(b.balance),
        })
        .collect();

    let mut output = render(rows, "No banks found.");
    if !banks.is_empty() {
        let total: crate::models::Money = banks.iter().map(|b| b.balance).sum();
        output.push_str(&format!("Saldo total: {}\n", total));
    }
    output
}
