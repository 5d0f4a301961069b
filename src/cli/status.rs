use super::load_session;
use crate::error::Result;
use crate::settings::{db_path, get_data_dir};
use crate::store::SqliteStore;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let db = db_path();

    match load_session() {
        Some(s) => println!("User:       {} ({:?})", s.email, s.user_type),
        None => println!("User:       (not logged in)"),
    }
    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db.display());

    if db.exists() {
        let store = SqliteStore::open(&db, &data_dir.join("receipts"))?;
        println!();
        println!("Bills:      {}", store.count_bills()?);
    } else {
        println!();
        println!("Database not found. Run `billed init` to set up.");
    }
    Ok(())
}
