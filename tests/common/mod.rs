use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 6] = [
    "Employee ID",
    "Name",
    "Email",
    "Basic Salary",
    "Allowances",
    "Deductions",
];

/// Writes an employees CSV with the standard header and the given rows.
pub fn write_employees_csv(path: &Path, rows: &[[&str; 6]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
