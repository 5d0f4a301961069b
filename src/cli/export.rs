use std::io::Write;

use super::{open_store, require_employee};
use crate::error::Result;
use crate::models::Bill;
use crate::store::Store;

pub fn write_csv<W: Write>(bills: &[Bill], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for bill in bills {
        wtr.serialize(bill)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run(output: Option<String>) -> Result<()> {
    let session = require_employee()?;
    let store = open_store()?;
    let bills = store.list_bills(&session.email)?;

    match output {
        Some(path) => {
            write_csv(&bills, std::fs::File::create(&path)?)?;
            println!("Exported {} bills to {path}", bills.len());
        }
        None => write_csv(&bills, std::io::stdout().lock())?,
    }
    Ok(())
}
