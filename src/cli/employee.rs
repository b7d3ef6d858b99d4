//! Employee CLI commands
//!
//! Adding an employee opens a payroll entry for the current month; edits to
//! name or salary flow into that employee's open entries.

use clap::Subcommand;

use super::{confirmation_required, parse_amount, parse_status};
use crate::display::{format_currency, format_employee_list};
use crate::error::{ContaproError, ContaproResult};
use crate::models::{ContractType, Employee};
use crate::services::Ledger;

/// Employee subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List all employees
    List,
    /// Register a new employee
    Add {
        /// Full name
        name: String,
        /// Job title
        #[arg(short, long)]
        role: String,
        /// Base salary
        #[arg(short, long)]
        salary: String,
        /// Contract type (CLT, PJ, Estagio)
        #[arg(short, long, default_value = "CLT")]
        contract: String,
    },
    /// Edit an existing employee
    Edit {
        /// Employee name or ID
        employee: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        role: Option<String>,
        #[arg(short, long)]
        salary: Option<String>,
        #[arg(short, long)]
        contract: Option<String>,
        /// ATIVO or INATIVO
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an employee together with their payroll entries
    Delete {
        /// Employee name or ID
        employee: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_contract(input: &str) -> ContaproResult<ContractType> {
    ContractType::parse(input)
        .ok_or_else(|| ContaproError::Validation(format!("Unknown contract type '{}'", input)))
}

/// Handle an employee command
pub fn handle_employee_command(ledger: &mut Ledger, cmd: EmployeeCommands) -> ContaproResult<()> {
    match cmd {
        EmployeeCommands::List => {
            print!("{}", format_employee_list(ledger.employees()));
        }

        EmployeeCommands::Add {
            name,
            role,
            salary,
            contract,
        } => {
            let employee = Employee::new(name, role, parse_amount(&salary)?, parse_contract(&contract)?);
            let added = ledger.add_employee(employee)?;
            println!(
                "Added employee: {} ({}) with salary {}",
                added.name,
                added.id,
                format_currency(added.base_salary)
            );
        }

        EmployeeCommands::Edit {
            employee,
            name,
            role,
            salary,
            contract,
            status,
        } => {
            let mut e = ledger
                .find_employee(&employee)
                .cloned()
                .ok_or_else(|| ContaproError::employee_not_found(&employee))?;

            if let Some(name) = name {
                e.name = name;
            }
            if let Some(role) = role {
                e.role = role;
            }
            if let Some(salary) = salary {
                e.base_salary = parse_amount(&salary)?;
            }
            if let Some(contract) = contract {
                e.contract_type = parse_contract(&contract)?;
            }
            if let Some(status) = status {
                e.status = parse_status(&status)?;
            }

            let name = e.name.clone();
            ledger.update_employee(e)?;
            println!("Updated employee: {}", name);
        }

        EmployeeCommands::Delete { employee, yes } => {
            let e = ledger
                .find_employee(&employee)
                .ok_or_else(|| ContaproError::employee_not_found(&employee))?;
            let (id, name) = (e.id, e.name.clone());

            if !yes {
                confirmation_required(&format!("employee: {} (and their payroll entries)", name));
                return Ok(());
            }

            ledger.remove_employee(id)?;
            println!("Deleted employee: {}", name);
        }
    }

    Ok(())
}
