//! SMS Blast - Main entry point
//!
//! Loads the configuration, contacts and message, asks for confirmation on
//! stdin, then sends one message per unique phone number.

use anyhow::{bail, Context, Result};
use clap::Parser;
use sms_blast::{
    confirm_send, load_message, Config, ContactLoader, Dispatcher, TwilioClient,
};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sms-blast")]
#[command(version)]
#[command(about = "Send one SMS message to every unique number in a contact list")]
struct Cli {
    /// TOML config file with a [twilio] section
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// CSV file of `name,phone` rows (no header)
    #[arg(long, default_value = "contacts.csv")]
    contacts: PathBuf,

    /// Text file whose whole contents are the message body
    #[arg(long, default_value = "message.txt")]
    message: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("fatal error loading config {}", cli.config.display()))?;

    init_logging(&config);

    let report = ContactLoader::new()
        .load_path(&cli.contacts)
        .context("fatal error getting contacts")?;
    info!(
        "Loaded {} contacts ({} rows skipped)",
        report.contacts.len(),
        report.rejected.len()
    );

    let message = load_message(&cli.message).context("fatal error getting message")?;

    let confirmed = confirm_send(&message, &mut io::stdin().lock(), &mut io::stdout())
        .context("fatal error reading user input")?;
    if !confirmed {
        bail!("Sounds like we're not ready, exiting!");
    }

    let client = TwilioClient::new(&config);
    let mut dispatcher = Dispatcher::new(client);
    let summary = dispatcher.dispatch_with(&report.contacts, &message, |result| {
        println!("{}", result);
    });

    let requests = dispatcher.sender().metrics().summary();
    info!(
        "Dispatch complete: {} sent, {} failed, {} duplicates skipped ({} requests, avg {:.0} ms)",
        summary.sent,
        summary.failed,
        summary.duplicates_skipped,
        requests.http_requests_total,
        requests.http_duration_avg_ms
    );

    Ok(())
}

/// Logs go to stderr so stdout carries only the prompt and status lines.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
