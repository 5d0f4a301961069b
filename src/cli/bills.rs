use comfy_table::{Cell, Table};

use super::{open_store, require_employee};
use crate::error::Result;
use crate::fmt::{money, short_date};
use crate::store::Store;

pub fn list() -> Result<()> {
    let session = require_employee()?;
    let store = open_store()?;
    let bills = store.list_bills(&session.email)?;

    if bills.is_empty() {
        println!("No bills yet for {}. Submit one with `billed new`.", session.email);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Type", "Name", "Amount", "VAT", "%", "Status", "Receipt"]);
    for bill in &bills {
        table.add_row(vec![
            Cell::new(bill.id),
            Cell::new(short_date(bill.date)),
            Cell::new(bill.expense_type.label()),
            Cell::new(&bill.name),
            Cell::new(money(bill.amount)),
            Cell::new(money(bill.vat)),
            Cell::new(bill.pct),
            Cell::new(bill.status.label()),
            Cell::new(&bill.file_name),
        ]);
    }
    println!("Bills for {}\n{table}", session.email);
    Ok(())
}
