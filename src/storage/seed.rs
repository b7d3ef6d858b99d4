//! Default collections
//!
//! Used whenever a collection is missing from the store (first run) or
//! cannot be parsed. Seed records carry fixed ids so that cross-references
//! between seeded collections hold even if only some of them are reset.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    AccrualPeriod, ActiveStatus, Bank, BankId, Client, ClientId, ContractType, CostCenter,
    CostCenterId, DocumentType, Employee, EmployeeId, Money, Payable, PayableId, PayableStatus,
    PayrollEntry, PayrollEntryId, PayrollStatus, Receivable, ReceivableId, ReceivableStatus,
    Supplier, SupplierId, TaxRegime,
};

/// Seed ids put the record number in the leading digits so that short
/// display ids (`rec-00000002`) stay distinct within a collection
fn id<T: From<Uuid>>(namespace: u128, n: u128) -> T {
    T::from(Uuid::from_u128((n << 96) | namespace))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn period(year: i32, month: u32) -> AccrualPeriod {
    AccrualPeriod::from_date(date(year, month, 1))
}

const CLIENTS: u128 = 0xc0a7_0001;
const EMPLOYEES: u128 = 0xc0a7_0002;
const SUPPLIERS: u128 = 0xc0a7_0003;
const BANKS: u128 = 0xc0a7_0004;
const COST_CENTERS: u128 = 0xc0a7_0005;
const RECEIVABLES: u128 = 0xc0a7_0006;
const PAYABLES: u128 = 0xc0a7_0007;
const PAYROLL: u128 = 0xc0a7_0008;

pub fn sicoob_id() -> BankId {
    id(BANKS, 1)
}

pub fn oteropay_id() -> BankId {
    id(BANKS, 2)
}

pub fn cost_centers() -> Vec<CostCenter> {
    ["Operacional", "Administrativo", "Marketing", "TI"]
        .iter()
        .enumerate()
        .map(|(i, name)| CostCenter {
            id: id::<CostCenterId>(COST_CENTERS, i as u128 + 1),
            name: name.to_string(),
        })
        .collect()
}

pub fn clients() -> Vec<Client> {
    let rows = [
        ("Tech Solutions LTDA", "12.345.678/0001-90", TaxRegime::LucroPresumido, 2500, ActiveStatus::Ativo, false),
        ("Padaria do João", "98.765.432/0001-10", TaxRegime::SimplesNacional, 800, ActiveStatus::Ativo, true),
        ("Consultoria Aguiar", "11.222.333/0001-55", TaxRegime::SimplesNacional, 1200, ActiveStatus::Ativo, false),
        ("Construtora Global", "55.444.333/0001-22", TaxRegime::LucroReal, 5000, ActiveStatus::Inativo, false),
        ("Agência Criativa", "33.222.111/0001-99", TaxRegime::SimplesNacional, 1500, ActiveStatus::Ativo, false),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, tax_id, regime, fee, status, delinquent))| Client {
            id: id::<ClientId>(CLIENTS, i as u128 + 1),
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            tax_regime: *regime,
            monthly_fee: Money::from_reais(*fee),
            status: *status,
            delinquent: *delinquent,
        })
        .collect()
}

pub fn employees() -> Vec<Employee> {
    let rows = [
        ("Ana Silva", "Contadora Senior", 6500, ContractType::Clt),
        ("Carlos Souza", "Analista Fiscal", 3500, ContractType::Clt),
        ("Roberto Alves", "Desenvolvedor", 8000, ContractType::Pj),
        ("Julia Lima", "Assistente RH", 2200, ContractType::Estagio),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, role, salary, contract))| Employee {
            id: id::<EmployeeId>(EMPLOYEES, i as u128 + 1),
            name: name.to_string(),
            role: role.to_string(),
            base_salary: Money::from_reais(*salary),
            contract_type: *contract,
            status: ActiveStatus::Ativo,
        })
        .collect()
}

pub fn suppliers() -> Vec<Supplier> {
    let rows = [
        ("AWS Services", "Software", "billing@aws.example"),
        ("Papelaria Central", "Material de Expediente", "(11) 3333-4444"),
        ("Google Workspace", "Software", "billing@google.example"),
        ("Aluguel Sala", "Aluguel", "(11) 98888-7777"),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, category, contact))| Supplier {
            id: id::<SupplierId>(SUPPLIERS, i as u128 + 1),
            name: name.to_string(),
            tax_id: String::new(),
            category: category.to_string(),
            contact: contact.to_string(),
            status: ActiveStatus::Ativo,
        })
        .collect()
}

pub fn banks() -> Vec<Bank> {
    vec![
        Bank {
            id: sicoob_id(),
            name: "Sicoob".to_string(),
            branch: "3001".to_string(),
            account: "12345-6".to_string(),
            balance: Money::from_reais(15_000),
            status: ActiveStatus::Ativo,
        },
        Bank {
            id: oteropay_id(),
            name: "Oteropay".to_string(),
            branch: "0001".to_string(),
            account: "98765-4".to_string(),
            balance: Money::from_reais(8_000),
            status: ActiveStatus::Ativo,
        },
    ]
}

pub fn receivables() -> Vec<Receivable> {
    let clients = clients();
    let client = |n: usize| (clients[n].id, clients[n].name.clone());

    let mut rows = Vec::new();
    let specs = [
        (0, (2023, 10), date(2023, 10, 15), 2500, ReceivableStatus::Pago, DocumentType::Boleto, sicoob_id(), "Prestação de Serviços", "Mensalidade Outubro", Some(date(2023, 10, 14))),
        (1, (2023, 10), date(2023, 10, 15), 800, ReceivableStatus::Atrasado, DocumentType::Pix, oteropay_id(), "Receita com Consultoria", "Consultoria Fiscal", None),
        (2, (2023, 11), date(2023, 11, 15), 1200, ReceivableStatus::Pendente, DocumentType::Boleto, sicoob_id(), "Prestação de Serviços", "Mensalidade Novembro", None),
        (0, (2023, 11), date(2023, 11, 15), 2500, ReceivableStatus::Pendente, DocumentType::Boleto, sicoob_id(), "Prestação de Serviços", "Mensalidade Novembro", None),
        (4, (2023, 10), date(2023, 10, 20), 1500, ReceivableStatus::Pago, DocumentType::DebitoAutomatico, oteropay_id(), "Receita de Trabalhos Extras", "Projeto Especial", Some(date(2023, 10, 20))),
    ];

    for (i, (c, (y, m), due, amount, status, doc, bank, category, description, paid_on)) in
        specs.into_iter().enumerate()
    {
        let (client_id, client_name) = client(c);
        rows.push(Receivable {
            id: id::<ReceivableId>(RECEIVABLES, i as u128 + 1),
            client_id,
            client_name,
            period: period(y, m),
            due_date: due,
            amount: Money::from_reais(amount),
            status,
            payment_method: doc.to_string(),
            bank_id: Some(bank),
            document_type: Some(doc),
            category: Some(category.to_string()),
            description: Some(description.to_string()),
            installments: Some(1),
            paid_on,
        });
    }
    rows
}

pub fn payables() -> Vec<Payable> {
    let centers = cost_centers();
    let specs = [
        ("AWS Services", "Software", 3, date(2023, 11, 10), 85050, PayableStatus::Pendente, oteropay_id(), DocumentType::DebitoAutomatico, "Servidor Nuvem", None),
        ("Papelaria Central", "Material de Expediente", 1, date(2023, 10, 25), 23000, PayableStatus::Pago, sicoob_id(), DocumentType::Pix, "Material Escritório", Some(date(2023, 10, 24))),
        ("Google Workspace", "Software", 3, date(2023, 11, 5), 15000, PayableStatus::Pendente, oteropay_id(), DocumentType::DebitoAutomatico, "Email Corporativo", None),
        ("Aluguel Sala", "Aluguel", 1, date(2023, 11, 1), 350000, PayableStatus::Pendente, sicoob_id(), DocumentType::Boleto, "Aluguel Sede", None),
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(i, (supplier, category, cc, due, cents, status, bank, doc, description, paid_on))| Payable {
            id: id::<PayableId>(PAYABLES, i as u128 + 1),
            supplier: supplier.to_string(),
            category: category.to_string(),
            cost_center_id: centers[cc].id,
            cost_center_name: centers[cc].name.clone(),
            due_date: due,
            amount: Money::from_cents(cents),
            status,
            bank_id: Some(bank),
            document_type: Some(doc),
            description: Some(description.to_string()),
            installments: Some(1),
            paid_on,
        })
        .collect()
}

pub fn payroll() -> Vec<PayrollEntry> {
    let employees = employees();
    let specs = [
        (0, (2023, 10), 800, 1500, 0, PayrollStatus::Fechada),
        (1, (2023, 10), 600, 800, 200, PayrollStatus::Fechada),
        (0, (2023, 11), 800, 0, 0, PayrollStatus::Aberta),
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(i, (e, (y, m), benefits, deductions, commission, status))| {
            let mut entry = PayrollEntry::for_employee(&employees[e], period(y, m));
            entry.id = id::<PayrollEntryId>(PAYROLL, i as u128 + 1);
            entry.benefits = Money::from_reais(benefits);
            entry.deductions = Money::from_reais(deductions);
            entry.commission = Money::from_reais(commission);
            entry.recompute_total();
            entry.status = status;
            entry
        })
        .collect()
}
