use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayslipError>;

/// Errors raised while running a payslip batch.
///
/// `Input` and `Schema` are fatal and abort the run before any record is
/// processed. `Record` and `Delivery` are scoped to a single employee and are
/// caught at the record boundary so the batch can continue.
#[derive(Error, Debug)]
pub enum PayslipError {
    #[error("cannot read input file {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input file is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("error processing employee {employee}: {reason}")]
    Record { employee: String, reason: String },
    #[error("mail configuration error: {0}")]
    Config(String),
    #[error("failed to send email to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}
