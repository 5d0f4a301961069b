use chrono::NaiveDate;

use super::Alert;
use crate::error::{BilledError, Result};
use crate::form::{Field, NewBillForm};
use crate::models::{Bill, BillDraft, ExpenseType, ReceiptFile, Session, UploadedFile};
use crate::receipt;
use crate::router::{Navigator, Route};
use crate::store::{Store, UploadRequest};
use crate::views::render_new_bill;

pub const DEFAULT_PCT: u8 = 20;
pub const INVALID_FILE_MESSAGE: &str = "Only jpg, jpeg and png receipts are accepted.";

/// Something the user did to the form.
#[derive(Debug, Clone)]
pub enum Event {
    Change { field: Field, value: String },
    Upload(ReceiptFile),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub file_name: String,
    pub uploaded: UploadedFile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Changed,
    Accepted(Accepted),
    Created(Bill),
}

/// Binds the new-bill form to the store: validates and uploads the receipt
/// when the file input changes, creates the bill on submit, then sends the
/// user back to the bills list.
pub struct NewBill<'a> {
    store: &'a dyn Store,
    navigator: &'a mut dyn Navigator,
    alert: &'a dyn Alert,
    session: &'a Session,
    form: NewBillForm,
    pending: Option<Accepted>,
}

impl<'a> NewBill<'a> {
    pub fn new(
        store: &'a dyn Store,
        navigator: &'a mut dyn Navigator,
        alert: &'a dyn Alert,
        session: &'a Session,
    ) -> Self {
        Self {
            store,
            navigator,
            alert,
            session,
            form: NewBillForm::default(),
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn form(&self) -> &NewBillForm {
        &self.form
    }

    /// The accepted receipt the next submit will attach, if any.
    #[cfg(test)]
    pub fn pending_file(&self) -> Option<&Accepted> {
        self.pending.as_ref()
    }

    pub fn render(&self) -> String {
        render_new_bill(&self.form)
    }

    pub fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        match event {
            Event::Change { field, value } => {
                self.form.set(field, &value);
                Ok(Outcome::Changed)
            }
            Event::Upload(file) => self.handle_change_file(file).map(Outcome::Accepted),
            Event::Submit => self.handle_submit().map(Outcome::Created),
        }
    }

    /// Select `file` in the receipt input. Anything but jpg/jpeg/png is
    /// rejected: the input is cleared and the user alerted. An accepted file
    /// is uploaded once, under the session email.
    pub fn handle_change_file(&mut self, file: ReceiptFile) -> Result<Accepted> {
        self.pending = None;
        if let Err(e) = receipt::validate(&file) {
            tracing::warn!(file_name = %file.name, "receipt rejected");
            self.form.file.clear();
            self.alert.alert(INVALID_FILE_MESSAGE);
            return Err(e);
        }

        self.form.file.select(file);
        let Some(selected) = self.form.file.selected() else {
            return Err(BilledError::MissingReceipt);
        };
        let uploaded = match self.store.upload_file(UploadRequest {
            file: selected,
            owner_email: &self.session.email,
        }) {
            Ok(uploaded) => uploaded,
            Err(e) => {
                self.form.file.clear();
                return Err(e);
            }
        };
        tracing::info!(file_name = %selected.name, key = %uploaded.key, "receipt uploaded");

        let accepted = Accepted {
            file_name: selected.name.clone(),
            uploaded,
        };
        self.pending = Some(accepted.clone());
        Ok(accepted)
    }

    /// Read the form into a draft, create the bill and navigate to the list.
    /// Once the bill exists, a failed navigation is logged, not returned.
    pub fn handle_submit(&mut self) -> Result<Bill> {
        let pending = self.pending.as_ref().ok_or(BilledError::MissingReceipt)?;
        let draft = read_draft(&self.form, &pending.file_name)?;
        let bill = self
            .store
            .create_bill(&pending.uploaded, &draft, &self.session.email)?;
        tracing::info!(id = bill.id, email = %bill.email, "bill created");
        if let Err(e) = self.navigator.navigate(Route::Bills) {
            tracing::warn!(id = bill.id, error = %e, "bill created but navigation failed");
        }
        Ok(bill)
    }
}

fn invalid(field: Field, reason: impl Into<String>) -> BilledError {
    BilledError::InvalidField {
        field: field.test_id(),
        reason: reason.into(),
    }
}

fn required<'f>(form: &'f NewBillForm, field: Field) -> Result<&'f str> {
    let value = form.value(field).trim();
    if value.is_empty() {
        return Err(invalid(field, "required"));
    }
    Ok(value)
}

fn non_negative(field: Field, value: &str) -> Result<f64> {
    let n: f64 = value
        .parse()
        .map_err(|_| invalid(field, format!("'{value}' is not a number")))?;
    if !n.is_finite() || n < 0.0 {
        return Err(invalid(field, format!("{value} must be zero or more")));
    }
    Ok(n)
}

fn pct(form: &NewBillForm) -> Result<u8> {
    let raw = form.value(Field::Pct).trim();
    match raw.parse::<i64>() {
        Ok(n) if (0..=100).contains(&n) => Ok(n as u8),
        Ok(n) => Err(invalid(Field::Pct, format!("{n} is outside 0-100"))),
        Err(_) => Ok(DEFAULT_PCT),
    }
}

/// Snapshot the form's current values as a draft.
pub fn read_draft(form: &NewBillForm, file_name: &str) -> Result<BillDraft> {
    let expense_type: ExpenseType = required(form, Field::ExpenseType)?.parse()?;

    let date_raw = required(form, Field::Datepicker)?;
    let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
        .map_err(|_| invalid(Field::Datepicker, format!("'{date_raw}' is not YYYY-MM-DD")))?;

    let amount = non_negative(Field::Amount, required(form, Field::Amount)?)?;

    let vat_raw = form.value(Field::Vat).trim();
    let vat = if vat_raw.is_empty() {
        0.0
    } else {
        non_negative(Field::Vat, vat_raw)?
    };

    let commentary = form.value(Field::Commentary).trim();

    Ok(BillDraft {
        expense_type,
        name: form.value(Field::ExpenseName).trim().to_string(),
        date,
        amount,
        vat,
        pct: pct(form)?,
        commentary: (!commentary.is_empty()).then(|| commentary.to_string()),
        file_name: file_name.to_string(),
    })
}
