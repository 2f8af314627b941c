//! Contact Relay - smoke-test entry point
//!
//! Submits one contact message, read from environment variables, against the
//! configured backend. Useful for exercising a freshly deployed backend
//! end-to-end without opening the site.

use anyhow::Result;
use contact_relay::{
    AsyncContactApi, AsyncContactClient, Config, ContactClient, ContactMessage, ContactSubmitter,
    FormSurface, SubmitOutcome,
};
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Console stand-in for the browser form: notifications become output
/// lines and the lock state becomes log lines.
struct ConsoleForm;

impl FormSurface for ConsoleForm {
    fn lock(&mut self) {
        info!("submit control locked");
    }

    fn unlock(&mut self) {
        info!("submit control restored");
    }

    fn notify_success(&mut self) {
        println!("Message sent. Thanks for reaching out!");
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn reset(&mut self) {
        info!("form cleared");
    }
}

fn field(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so notification output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Submitting against {}", config.api_base_url);

    let client = ContactClient::new(&config);
    let api = Arc::new(AsyncContactClient::new(client)) as Arc<dyn AsyncContactApi>;
    let submitter = ContactSubmitter::new(api, config.warm_up);

    let message = ContactMessage {
        name: field("CONTACT_NAME"),
        email: field("CONTACT_EMAIL"),
        phone: field("CONTACT_PHONE"),
        subject: field("CONTACT_SUBJECT"),
        message: field("CONTACT_MESSAGE"),
        honeypot: String::new(),
    };

    let mut form = ConsoleForm;
    match submitter.submit(&message, &mut form).await {
        Ok(SubmitOutcome::Sent) => info!("submission accepted"),
        Ok(SubmitOutcome::Discarded) => info!("submission discarded"),
        Err(e) => {
            error!("submission failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
