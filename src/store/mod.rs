//! Persistence boundary for bills and their receipts.
//!
//! Handlers call the store at most once per event: one `upload_file` per
//! accepted file change, one `create_bill` per submit.

#[cfg(test)]
pub mod mock;
pub mod sqlite;

use crate::error::Result;
use crate::models::{Bill, BillDraft, ReceiptFile, UploadedFile};

pub use sqlite::SqliteStore;

pub struct UploadRequest<'a> {
    pub file: &'a ReceiptFile,
    pub owner_email: &'a str,
}

pub trait Store {
    /// Persist the raw receipt and return where it lives.
    fn upload_file(&self, request: UploadRequest<'_>) -> Result<UploadedFile>;

    /// Create a pending bill attached to a previously uploaded receipt.
    fn create_bill(&self, file: &UploadedFile, draft: &BillDraft, email: &str) -> Result<Bill>;

    /// Bills owned by `email`, most recent date first.
    fn list_bills(&self, email: &str) -> Result<Vec<Bill>>;
}
