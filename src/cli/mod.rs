pub mod bills;
pub mod export;
pub mod init;
pub mod login;
pub mod new;
pub mod render;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use crate::containers::Alert;
use crate::error::{BilledError, Result};
use crate::models::{Session, UserType};
use crate::session::{current_user, LocalStorage};
use crate::settings::{db_path, receipts_dir};
use crate::store::SqliteStore;

#[derive(Parser)]
#[command(name = "billed", about = "Submit expense reports and their receipts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and initialize the database.
    Init {
        /// Path for billed data (default: ~/Documents/billed)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Sign in as an employee.
    Login {
        /// Email the bills are filed under
        email: String,
        /// Sign in as an administrator instead
        #[arg(long)]
        admin: bool,
    },
    /// Sign out.
    Logout,
    /// Submit a new expense report with its receipt.
    New(new::NewArgs),
    /// List your expense reports.
    Bills,
    /// Print the page the router renders for a path, e.g. '#employee/bill/new'.
    Render {
        path: String,
    },
    /// Export your expense reports to CSV.
    Export {
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show session, database and summary statistics.
    Status,
    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

/// Alerts go to stderr in red.
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}

pub(crate) fn open_store() -> Result<SqliteStore> {
    let path = db_path();
    if !path.exists() {
        return Err(BilledError::Settings(format!(
            "Database not found at {}\nRun `billed init` to create one.",
            path.display()
        )));
    }
    SqliteStore::open(&path, &receipts_dir())
}

pub(crate) fn load_session() -> Option<Session> {
    current_user(&LocalStorage::open(&LocalStorage::default_path()))
}

pub(crate) fn require_employee() -> Result<Session> {
    let session = load_session().ok_or(BilledError::NotLoggedIn)?;
    if session.user_type != UserType::Employee {
        return Err(BilledError::Other(format!(
            "{} is signed in as an administrator; expense reports are filed by employees",
            session.email
        )));
    }
    Ok(session)
}
