use std::path::Path;

use clap::Args;
use colored::Colorize;

use super::{open_store, require_employee, TerminalAlert};
use crate::containers::{Event, NewBill};
use crate::error::Result;
use crate::fmt::money;
use crate::form::Field;
use crate::receipt;
use crate::router::{Route, Router};

#[derive(Args)]
pub struct NewArgs {
    /// Expense type, e.g. 'Transports' or 'Restaurants et bars'
    #[arg(long = "type")]
    pub expense_type: String,
    /// Amount including taxes
    #[arg(long)]
    pub amount: String,
    /// Date: YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Receipt image (jpg, jpeg or png)
    #[arg(long)]
    pub file: String,
    /// Expense name, e.g. 'Vol Paris Londres'
    #[arg(long)]
    pub name: Option<String>,
    /// VAT amount
    #[arg(long)]
    pub vat: Option<String>,
    /// VAT percentage (default 20)
    #[arg(long)]
    pub pct: Option<String>,
    #[arg(long)]
    pub commentary: Option<String>,
    /// Print the filled-in form instead of submitting it
    #[arg(long)]
    pub preview: bool,
}

pub fn run(args: NewArgs) -> Result<()> {
    let session = require_employee()?;
    let store = open_store()?;
    let mut router = Router::new(&store, Some(session.clone()));
    router.on_navigate(Route::NewBill.path())?;

    let alert = TerminalAlert;
    let mut new_bill = NewBill::new(&store, &mut router, &alert, &session);

    let changes = [
        (Field::ExpenseType, Some(args.expense_type)),
        (Field::ExpenseName, args.name),
        (Field::Amount, Some(args.amount)),
        (Field::Datepicker, Some(args.date)),
        (Field::Vat, args.vat),
        (Field::Pct, args.pct),
        (Field::Commentary, args.commentary),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            new_bill.dispatch(Event::Change { field, value })?;
        }
    }

    if args.preview {
        println!("{}", new_bill.render());
        return Ok(());
    }

    let receipt = receipt::from_path(Path::new(&args.file))?;
    new_bill.dispatch(Event::Upload(receipt))?;
    let bill = new_bill.handle_submit()?;
    drop(new_bill);

    println!(
        "{} bill #{}: {} {} on {} ({})",
        "Created".green().bold(),
        bill.id,
        bill.expense_type,
        money(bill.amount),
        bill.date,
        bill.status.label()
    );
    if let Some(route) = router.current_route() {
        tracing::debug!(path = route.path(), "now showing");
    }
    Ok(())
}
