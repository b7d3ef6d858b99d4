use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use contapro::cli::{
    handle_bank_command, handle_client_command, handle_config_command, handle_employee_command,
    handle_export_command, handle_payable_command, handle_payroll_command,
    handle_receivable_command, handle_report_command, handle_supplier_command,
};
use contapro::config::{ContaproPaths, Settings};
use contapro::services::Ledger;
use contapro::storage::{Collection, Storage};

#[derive(Parser)]
#[command(
    name = "contapro",
    version,
    about = "Bookkeeping ledger for a small accounting office",
    long_about = "ContaPro keeps the office's clients, staff, suppliers and bank \
                  accounts, the receivables and payables between them, and the \
                  monthly payroll. It prints reports and writes CNAB240 salary \
                  files, CSV lists and full JSON/YAML exports."
)]
struct Cli {
    /// Base directory for data, settings and exports
    #[arg(long, global = true, env = "CONTAPRO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep the ledger and settings in memory; only explicit export files are written
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Client management commands
    #[command(subcommand)]
    Client(contapro::cli::ClientCommands),

    /// Employee management commands
    #[command(subcommand)]
    Employee(contapro::cli::EmployeeCommands),

    /// Supplier management commands
    #[command(subcommand)]
    Supplier(contapro::cli::SupplierCommands),

    /// Bank account commands
    #[command(subcommand)]
    Bank(contapro::cli::BankCommands),

    /// Receivable commands
    #[command(subcommand, alias = "rec")]
    Receivable(contapro::cli::ReceivableCommands),

    /// Payable commands
    #[command(subcommand, alias = "pay")]
    Payable(contapro::cli::PayableCommands),

    /// Payroll commands
    #[command(subcommand)]
    Payroll(contapro::cli::PayrollCommands),

    /// Reports
    #[command(subcommand)]
    Report(contapro::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(contapro::cli::ExportCommands),

    /// Flag pending receivables and payables past their due date as ATRASADO
    Overdue {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Drop a stored collection so it is re-seeded on the next run
    Reset {
        /// Collection name, or "all"
        collection: String,
        /// Confirm reset
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(contapro::cli::ConfigCommands),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_collections(name: &str) -> Result<Vec<Collection>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Collection::ALL.to_vec());
    }
    Collection::ALL
        .iter()
        .find(|c| c.name().eq_ignore_ascii_case(name))
        .map(|c| vec![*c])
        .ok_or_else(|| anyhow::anyhow!("Unknown collection '{}'", name))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContaproPaths::with_base_dir(dir),
        None => ContaproPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = if cli.ephemeral {
        Storage::in_memory()
    } else {
        Storage::open(&paths, settings.persistence)?
    };

    let Some(command) = cli.command else {
        println!("ContaPro - bookkeeping ledger");
        println!();
        println!("Run 'contapro --help' for usage information.");
        return Ok(());
    };

    if let Commands::Reset { collection, yes } = &command {
        let collections = parse_collections(collection)?;
        if !*yes {
            println!("About to reset {} to seed data", collection);
            println!("Use --yes to confirm");
            return Ok(());
        }
        for c in collections {
            storage.reset(c)?;
        }
        println!("Reset {}", collection);
        return Ok(());
    }

    let mut ledger = Ledger::load(storage);

    match command {
        Commands::Client(cmd) => handle_client_command(&mut ledger, cmd)?,
        Commands::Employee(cmd) => handle_employee_command(&mut ledger, cmd)?,
        Commands::Supplier(cmd) => handle_supplier_command(&mut ledger, cmd)?,
        Commands::Bank(cmd) => handle_bank_command(&mut ledger, cmd)?,
        Commands::Receivable(cmd) => handle_receivable_command(&mut ledger, cmd)?,
        Commands::Payable(cmd) => handle_payable_command(&mut ledger, cmd)?,
        Commands::Payroll(cmd) => {
            handle_payroll_command(&mut ledger, &mut settings, &paths, !cli.ephemeral, cmd)?
        }
        Commands::Report(cmd) => handle_report_command(&ledger, cmd)?,
        Commands::Export(cmd) => handle_export_command(&ledger, cmd)?,
        Commands::Overdue { as_of } => {
            let today = match as_of {
                Some(d) => contapro::cli::parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let flagged = ledger.refresh_overdue(today)?;
            println!("Flagged {} records as ATRASADO", flagged);
        }
        Commands::Config(cmd) => {
            handle_config_command(&paths, &mut settings, !cli.ephemeral, cmd)?
        }
        Commands::Reset { .. } => {}
    }

    Ok(())
}
