use crate::employee::{Amount, EmployeeRecord};
use crate::error::{PayslipError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column headers that must be present before any record is processed.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Employee ID",
    "Name",
    "Email",
    "Basic Salary",
    "Allowances",
    "Deductions",
];

/// One row as it appears on the wire. Money fields stay as text here so a
/// malformed number fails per record, after the id and name are known.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Employee ID")]
    employee_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Basic Salary")]
    basic_salary: String,
    #[serde(rename = "Allowances")]
    allowances: String,
    #[serde(rename = "Deductions")]
    deductions: String,
}

impl TryFrom<RawRow> for EmployeeRecord {
    type Error = PayslipError;

    fn try_from(raw: RawRow) -> Result<Self> {
        let identity = format!("{} ({})", raw.employee_id, raw.name);
        let parse = |field: &str, value: &str| -> Result<Amount> {
            value.parse().map_err(|reason| PayslipError::Record {
                employee: identity.clone(),
                reason: format!("{field}: {reason}"),
            })
        };
        Ok(Self {
            basic_salary: parse("Basic Salary", &raw.basic_salary)?,
            allowances: parse("Allowances", &raw.allowances)?,
            deductions: parse("Deductions", &raw.deductions)?,
            employee_id: raw.employee_id,
            name: raw.name,
            email: raw.email,
        })
    }
}

/// Reads employee records from a CSV source.
///
/// Wraps `csv::Reader` and yields `Result<EmployeeRecord>` per row, after the
/// header has been validated against [`REQUIRED_COLUMNS`]. Whitespace is
/// trimmed and extra columns are ignored.
pub struct EmployeeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl EmployeeReader<File> {
    /// Opens the input file, mapping open failures to a fatal `Input` error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PayslipError::Input {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> EmployeeReader<R> {
    /// Creates a reader from any `Read` source (e.g. File, test bytes).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Validates the header, then returns a lazy iterator over records.
    ///
    /// A missing required column is a fatal `Schema` error raised here,
    /// before any row has been yielded.
    pub fn records(mut self) -> Result<impl Iterator<Item = Result<EmployeeRecord>>> {
        let headers = self.reader.headers()?.clone();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PayslipError::Schema { missing });
        }
        Ok(self
            .reader
            .into_deserialize::<RawRow>()
            .map(|result| result.map_err(PayslipError::from).and_then(TryInto::try_into)))
    }
}
