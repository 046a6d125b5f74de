use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A non-negative monetary amount.
///
/// Wrapper around `rust_decimal::Decimal` so salary components cannot carry
/// negative values past the loader. Validation failures are plain strings;
/// the loader tags them with the employee identity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, String> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(format!("amount must not be negative, got {value}"))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = String;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| format!("'{s}' is not a valid amount"))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One row of the input file, validated and typed.
///
/// Ephemeral: constructed by the loader, turned into a [`Payslip`] and then
/// discarded. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub basic_salary: Amount,
    pub allowances: Amount,
    pub deductions: Amount,
}

impl EmployeeRecord {
    /// Identity string used when tagging per-record errors and log lines.
    pub fn identity(&self) -> String {
        format!("{} ({})", self.employee_id, self.name)
    }
}

/// An [`EmployeeRecord`] augmented with the derived net salary.
///
/// Produced as a new value rather than mutating the loaded record, so a
/// loader sequence can be reused without aliasing concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub basic_salary: Amount,
    pub allowances: Amount,
    pub deductions: Amount,
    pub net_salary: Decimal,
}

impl Payslip {
    /// Net salary = basic + allowances - deductions. Deductions larger than
    /// the gross leave a negative net, which is rendered as-is.
    pub fn from_record(record: EmployeeRecord) -> Self {
        let net_salary =
            record.basic_salary.value() + record.allowances.value() - record.deductions.value();
        Self {
            employee_id: record.employee_id,
            name: record.name,
            email: record.email,
            basic_salary: record.basic_salary,
            allowances: record.allowances,
            deductions: record.deductions,
            net_salary,
        }
    }

    pub fn identity(&self) -> String {
        format!("{} ({})", self.employee_id, self.name)
    }
}
