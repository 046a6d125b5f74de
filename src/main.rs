use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payslip_gen::batch::BatchRunner;
use payslip_gen::config::MailConfig;
use payslip_gen::notifier::{NotifierBox, SmtpNotifier};
use payslip_gen::reader::EmployeeReader;
use payslip_gen::renderer::PdfRenderer;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input employees CSV file
    #[arg(default_value = "employees.csv")]
    input: PathBuf,

    /// Directory where payslip PDFs are written
    #[arg(long, default_value = "payslips")]
    output_dir: PathBuf,

    /// Email each payslip to the employee after rendering
    #[arg(long)]
    send_email: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Mail stays opt-in; incomplete credentials degrade to a no-mail run
    // rather than aborting document generation.
    let notifier: Option<NotifierBox> = if cli.send_email {
        match MailConfig::from_env().and_then(|config| SmtpNotifier::new(&config)) {
            Ok(notifier) => Some(Box::new(notifier)),
            Err(e) => {
                warn!("email sending disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    let records = EmployeeReader::from_path(&cli.input)
        .into_diagnostic()?
        .records()
        .into_diagnostic()?;

    let runner = BatchRunner::new(PdfRenderer::new(cli.output_dir), notifier);
    let summary = runner.run(records);

    info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        sent = summary.sent,
        send_failures = summary.send_failures,
        "batch complete"
    );
    Ok(())
}
