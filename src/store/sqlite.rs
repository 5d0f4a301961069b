use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};

use super::{Store, UploadRequest};
use crate::db::{get_connection, init_db};
use crate::error::{BilledError, Result};
use crate::models::{Bill, BillDraft, BillStatus, UploadedFile};
use crate::receipt::{file_key, sanitized_file_name};

const BILL_COLUMNS: &str = "id, key, email, expense_type, name, date, amount, vat, pct, \
     commentary, file_url, file_name, status, created_at";

pub struct SqliteStore {
    conn: Connection,
    receipts_dir: PathBuf,
}

/// Raw bill row before the text columns are parsed into enums.
struct BillRow {
    id: i64,
    key: String,
    email: String,
    expense_type: String,
    name: String,
    date: NaiveDate,
    amount: f64,
    vat: f64,
    pct: u8,
    commentary: Option<String>,
    file_url: String,
    file_name: String,
    status: String,
    created_at: String,
}

impl BillRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            key: row.get(1)?,
            email: row.get(2)?,
            expense_type: row.get(3)?,
            name: row.get(4)?,
            date: row.get(5)?,
            amount: row.get(6)?,
            vat: row.get(7)?,
            pct: row.get(8)?,
            commentary: row.get(9)?,
            file_url: row.get(10)?,
            file_name: row.get(11)?,
            status: row.get(12)?,
            created_at: row.get::<_, Option<String>>(13)?.unwrap_or_default(),
        })
    }

    fn into_bill(self) -> Result<Bill> {
        Ok(Bill {
            id: self.id,
            key: self.key,
            email: self.email,
            expense_type: self.expense_type.parse()?,
            name: self.name,
            date: self.date,
            amount: self.amount,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

impl SqliteStore {
    pub fn new(conn: Connection, receipts_dir: &Path) -> Self {
        Self {
            conn,
            receipts_dir: receipts_dir.to_path_buf(),
        }
    }

    /// Open (and migrate) the database at `db_path`.
    pub fn open(db_path: &Path, receipts_dir: &Path) -> Result<Self> {
        let conn = get_connection(db_path)?;
        init_db(&conn)?;
        Ok(Self::new(conn, receipts_dir))
    }

    pub fn count_bills(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT count(*) FROM bills", [], |r| r.get(0))?)
    }

    fn get_bill(&self, id: i64) -> Result<Bill> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {BILL_COLUMNS} FROM bills WHERE id = ?1"),
                [id],
                BillRow::from_row,
            )
            .optional()?
            .ok_or_else(|| BilledError::Store(format!("bill {id} not found")))?;
        row.into_bill()
    }
}

impl Store for SqliteStore {
    fn upload_file(&self, request: UploadRequest<'_>) -> Result<UploadedFile> {
        let file = request.file;
        let stored_name = sanitized_file_name(&file.name);
        let key = file_key(request.owner_email, &file.name, &file.bytes);

        let existing: Option<String> = self
            .conn
            .query_row("SELECT file_url FROM receipts WHERE key = ?1", [&key], |r| r.get(0))
            .optional()?;
        if let Some(file_url) = existing {
            tracing::debug!(%key, "receipt already stored");
            return Ok(UploadedFile { file_url, key });
        }

        std::fs::create_dir_all(&self.receipts_dir)?;
        let path = self.receipts_dir.join(format!("{key}-{stored_name}"));
        std::fs::write(&path, &file.bytes)?;
        let file_url = format!("file://{}", path.display());

        self.conn.execute(
            "INSERT INTO receipts (key, owner_email, file_name, media_type, file_url, size) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                key,
                request.owner_email,
                file.name,
                file.media_type,
                file_url,
                file.bytes.len() as i64
            ],
        )?;

        tracing::debug!(%key, size = file.bytes.len(), "receipt stored");
        Ok(UploadedFile { file_url, key })
    }

    fn create_bill(&self, file: &UploadedFile, draft: &BillDraft, email: &str) -> Result<Bill> {
        self.conn.execute(
            "INSERT INTO bills (key, email, expense_type, name, date, amount, vat, pct, commentary, \
             file_url, file_name, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                file.key,
                email,
                draft.expense_type.label(),
                draft.name,
                draft.date,
                draft.amount,
                draft.vat,
                draft.pct,
                draft.commentary,
                file.file_url,
                draft.file_name,
                BillStatus::Pending.as_str()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, %email, "bill row inserted");
        self.get_bill(id)
    }

    fn list_bills(&self, email: &str) -> Result<Vec<Bill>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BILL_COLUMNS} FROM bills WHERE email = ?1 ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([email], BillRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(BillRow::into_bill).collect()
    }
}
