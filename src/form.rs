//! In-memory state of the new-bill form: the values the inputs currently
//! hold, addressed by the same test ids the rendered markup carries.

use std::collections::HashMap;

use crate::models::{ExpenseType, ReceiptFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ExpenseType,
    ExpenseName,
    Datepicker,
    Amount,
    Vat,
    Pct,
    Commentary,
}

impl Field {
    pub fn test_id(self) -> &'static str {
        match self {
            Field::ExpenseType => "expense-type",
            Field::ExpenseName => "expense-name",
            Field::Datepicker => "datepicker",
            Field::Amount => "amount",
            Field::Vat => "vat",
            Field::Pct => "pct",
            Field::Commentary => "commentary",
        }
    }
}

/// The receipt `<input type="file">`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub value: String,
    pub files: Vec<ReceiptFile>,
}

impl FileInput {
    /// Select a single file, replacing any previous selection.
    pub fn select(&mut self, file: ReceiptFile) {
        self.value = format!("C:\\fakepath\\{}", file.name);
        self.files = vec![file];
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.files.clear();
    }

    pub fn selected(&self) -> Option<&ReceiptFile> {
        self.files.first()
    }
}

#[derive(Debug, Clone)]
pub struct NewBillForm {
    values: HashMap<Field, String>,
    pub file: FileInput,
}

impl Default for NewBillForm {
    fn default() -> Self {
        let mut values = HashMap::new();
        // A required <select> starts on its first option.
        values.insert(Field::ExpenseType, ExpenseType::ALL[0].label().to_string());
        Self {
            values,
            file: FileInput::default(),
        }
    }
}

impl NewBillForm {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }
}
