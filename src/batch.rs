use crate::employee::{EmployeeRecord, Payslip};
use crate::error::Result;
use crate::notifier::NotifierBox;
use crate::renderer::PdfRenderer;
use tracing::{error, info, warn};

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub sent: usize,
    pub send_failures: usize,
}

/// Sequential batch loop: compute net salary, render the payslip, and
/// optionally email it, one record at a time.
///
/// Per-record errors are logged with the employee identity and the loop
/// continues; delivery failures never undo a successful render.
pub struct BatchRunner {
    renderer: PdfRenderer,
    notifier: Option<NotifierBox>,
}

impl BatchRunner {
    pub fn new(renderer: PdfRenderer, notifier: Option<NotifierBox>) -> Self {
        Self { renderer, notifier }
    }

    pub fn run(&self, records: impl Iterator<Item = Result<EmployeeRecord>>) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    error!("skipping record: {e}");
                    summary.skipped += 1;
                    continue;
                }
            };

            let slip = Payslip::from_record(record);
            let path = match self.renderer.render(&slip) {
                Ok(path) => path,
                Err(e) => {
                    error!("skipping record: {e}");
                    summary.skipped += 1;
                    continue;
                }
            };
            summary.rendered += 1;
            info!(employee = %slip.identity(), path = %path.display(), "payslip written");

            if let Some(notifier) = &self.notifier {
                match notifier.send(&slip.email, &path) {
                    Ok(()) => {
                        summary.sent += 1;
                        info!(employee = %slip.identity(), to = %slip.email, "payslip emailed");
                    }
                    Err(e) => {
                        summary.send_failures += 1;
                        warn!(employee = %slip.identity(), "{e}");
                    }
                }
            }
        }
        summary
    }
}
