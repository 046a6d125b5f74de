use crate::config::MailConfig;
use crate::error::{PayslipError, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fs;
use std::path::Path;
use std::time::Duration;

const SUBJECT: &str = "Your Payslip for This Month";
const BODY: &str = "Dear Employee,\n\nPlease find attached your payslip for this month.\n\n\
                    Best regards,\nHR Team";

// A hung relay should stall one send, not the whole evening.
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Port for delivering one payslip to one recipient.
///
/// The batch loop only sees this trait, so tests can swap in a recording
/// stub without any SMTP server.
pub trait Notify {
    fn send(&self, recipient: &str, attachment: &Path) -> Result<()>;
}

pub type NotifierBox = Box<dyn Notify>;

/// Sends payslips through an SMTP relay with STARTTLS and a fixed
/// subject/body template.
#[derive(Debug)]
pub struct SmtpNotifier {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let from: Mailbox = config.user.parse().map_err(|_| {
            PayslipError::Config(format!("EMAIL_USER '{}' is not a valid address", config.user))
        })?;
        let transport = SmtpTransport::starttls_relay(&config.server)
            .map_err(|e| PayslipError::Config(format!("SMTP_SERVER '{}': {e}", config.server)))?;
        let mailer = transport
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        Ok(Self { mailer, from })
    }
}

impl Notify for SmtpNotifier {
    fn send(&self, recipient: &str, attachment: &Path) -> Result<()> {
        let delivery = |reason: String| PayslipError::Delivery {
            recipient: recipient.to_string(),
            reason,
        };

        let to: Mailbox = recipient
            .parse()
            .map_err(|_| delivery("invalid recipient address".to_string()))?;
        let content = fs::read(attachment)
            .map_err(|e| delivery(format!("cannot read attachment {}: {e}", attachment.display())))?;
        let filename = attachment
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "payslip.pdf".to_string());
        let pdf = ContentType::parse("application/pdf")
            .map_err(|e| delivery(e.to_string()))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(SUBJECT)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(BODY.to_string()))
                    .singlepart(Attachment::new(filename).body(content, pdf)),
            )
            .map_err(|e| delivery(e.to_string()))?;

        self.mailer
            .send(&email)
            .map_err(|e| delivery(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            user: "hr@example.com".to_string(),
            pass: "secret".to_string(),
            server: "smtp.example.com".to_string(),
            port: 587,
        }
    }

    #[test]
    fn test_notifier_builds_from_config() {
        let notifier = SmtpNotifier::new(&config()).unwrap();
        assert!(format!("{notifier:?}").contains("SmtpNotifier"));
    }

    #[test]
    fn test_invalid_sender_is_config_error() {
        let mut config = config();
        config.user = "not an address".to_string();
        match SmtpNotifier::new(&config) {
            Err(PayslipError::Config(msg)) => assert!(msg.contains("EMAIL_USER")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_recipient_fails_before_connecting() {
        let notifier = SmtpNotifier::new(&config()).unwrap();
        match notifier.send("not an address", Path::new("E100.pdf")) {
            Err(PayslipError::Delivery { recipient, reason }) => {
                assert_eq!(recipient, "not an address");
                assert!(reason.contains("invalid recipient"));
            }
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_attachment_fails_before_connecting() {
        let notifier = SmtpNotifier::new(&config()).unwrap();
        let result = notifier.send("jane@example.com", Path::new("no/such/E100.pdf"));
        match result {
            Err(PayslipError::Delivery { reason, .. }) => {
                assert!(reason.contains("attachment"));
            }
            other => panic!("expected delivery error, got {other:?}"),
        }
    }
}
