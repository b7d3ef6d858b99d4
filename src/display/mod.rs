//! Display formatting for terminal output
//!
//! List views are rendered as tables; amounts use the Brazilian currency
//! format and dates are shown as `DD/MM/YYYY`.

pub mod financial;
pub mod format;
pub mod registry;

pub use financial::{format_payable_list, format_payroll_list, format_receivable_list};
pub use format::{format_currency, format_date, format_date_str, truncate};
pub use registry::{format_bank_list, format_client_list, format_employee_list, format_supplier_list};
