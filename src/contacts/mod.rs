//! Contact file loading.
//!
//! Reads a header-less CSV source where field 0 is the display name and field 1
//! is a raw phone number. Extra fields are ignored. Rows that cannot be turned
//! into a [`Contact`] are logged and reported back instead of failing the load;
//! only an unreadable source aborts it.
//!
//! The loader does not deduplicate. Two rows with the same canonical number
//! both come back, and the dispatcher decides which one is sent to.

use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{LoadError, LoadResult};
use crate::models::Contact;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Row had fewer than two fields
    MissingField,

    /// Row could not be decoded by the CSV reader
    Malformed(String),

    /// Phone field did not normalize
    InvalidPhone(ValidationError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "expected a name and a phone number"),
            Self::Malformed(reason) => write!(f, "malformed row: {}", reason),
            Self::InvalidPhone(err) => write!(f, "{}", err),
        }
    }
}

/// A skipped row and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source, when the reader knows it
    pub line: Option<u64>,

    /// Raw fields of the row (empty if the row could not be decoded)
    pub fields: Vec<String>,

    /// Why the row was skipped
    pub reason: RejectReason,
}

/// Result of loading a contact source.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Valid contacts in source order
    pub contacts: Vec<Contact>,

    /// Every skipped row, in source order
    pub rejected: Vec<RejectedRow>,
}

/// Loader for CSV contact sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactLoader;

impl ContactLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load contacts from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::SourceUnreadable` if the file cannot be opened or an
    /// I/O error occurs while reading it.
    pub fn load_path(&self, path: impl AsRef<Path>) -> LoadResult<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::SourceUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        self.read_rows(file, &path.display().to_string())
    }

    /// Load contacts from any reader (used for in-memory sources).
    pub fn load_reader<R: Read>(&self, reader: R) -> LoadResult<LoadReport> {
        self.read_rows(reader, "<reader>")
    }

    fn read_rows<R: Read>(&self, reader: R, source: &str) -> LoadResult<LoadReport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut report = LoadReport::default();

        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line());
                    if let csv::ErrorKind::Io(io_err) = e.kind() {
                        return Err(LoadError::SourceUnreadable {
                            path: source.to_string(),
                            reason: io_err.to_string(),
                        });
                    }
                    report.reject(RejectedRow {
                        line,
                        fields: Vec::new(),
                        reason: RejectReason::Malformed(e.to_string()),
                    });
                    continue;
                }
            };

            let line = record.position().map(|p| p.line());
            let fields: Vec<String> = record.iter().map(str::to_string).collect();

            if fields.len() < 2 {
                report.reject(RejectedRow {
                    line,
                    fields,
                    reason: RejectReason::MissingField,
                });
                continue;
            }

            match PhoneNumber::normalize(&fields[1]) {
                Ok(phone_number) => {
                    report.contacts.push(Contact::new(fields[0].clone(), phone_number));
                }
                Err(err) => {
                    report.reject(RejectedRow {
                        line,
                        fields,
                        reason: RejectReason::InvalidPhone(err),
                    });
                }
            }
        }

        tracing::debug!(
            "Loaded {} contacts from {} ({} rows skipped)",
            report.contacts.len(),
            source,
            report.rejected.len()
        );

        Ok(report)
    }
}

impl LoadReport {
    fn reject(&mut self, row: RejectedRow) {
        tracing::warn!(
            line = ?row.line,
            "skipping record {:?}: {}",
            row.fields,
            row.reason
        );
        self.rejected.push(row);
    }
}
