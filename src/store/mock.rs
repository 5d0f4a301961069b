use std::cell::{Cell, RefCell};

use super::{Store, UploadRequest};
use crate::error::{BilledError, Result};
use crate::models::{Bill, BillDraft, BillStatus, UploadedFile};

/// In-memory store with canned answers and call counters.
#[derive(Default)]
pub struct MockStore {
    fail_upload: bool,
    fail_create: bool,
    uploads: RefCell<Vec<(String, String)>>,
    bills: RefCell<Vec<Bill>>,
    create_calls: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn upload_calls(&self) -> usize {
        self.uploads.borrow().len()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.get()
    }

    /// (file name, owner email) of every upload, in call order.
    pub fn uploaded(&self) -> Vec<(String, String)> {
        self.uploads.borrow().clone()
    }
}

impl Store for MockStore {
    fn upload_file(&self, request: UploadRequest<'_>) -> Result<UploadedFile> {
        self.uploads
            .borrow_mut()
            .push((request.file.name.clone(), request.owner_email.to_string()));
        if self.fail_upload {
            return Err(BilledError::Store("upload rejected".to_string()));
        }
        Ok(UploadedFile {
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
            key: "1234".to_string(),
        })
    }

    fn create_bill(&self, file: &UploadedFile, draft: &BillDraft, email: &str) -> Result<Bill> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail_create {
            return Err(BilledError::Store("create rejected".to_string()));
        }
        let bill = Bill {
            id: self.bills.borrow().len() as i64 + 1,
            key: file.key.clone(),
            email: email.to_string(),
            expense_type: draft.expense_type,
            name: draft.name.clone(),
            date: draft.date,
            amount: draft.amount,
            vat: draft.vat,
            pct: draft.pct,
            commentary: draft.commentary.clone(),
            file_url: file.file_url.clone(),
            file_name: draft.file_name.clone(),
            status: BillStatus::Pending,
            created_at: "2001-01-01 00:00:00".to_string(),
        };
        self.bills.borrow_mut().push(bill.clone());
        Ok(bill)
    }

    fn list_bills(&self, email: &str) -> Result<Vec<Bill>> {
        let mut bills: Vec<Bill> = self
            .bills
            .borrow()
            .iter()
            .filter(|b| b.email == email)
            .cloned()
            .collect();
        bills.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(bills)
    }
}
