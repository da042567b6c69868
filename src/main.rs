use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resume_mailer::batch::{BatchRunner, ConsoleReporter, TokioPacer};
use resume_mailer::config::Config;
use resume_mailer::input;
use resume_mailer::mail::SmtpTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging; stdout is reserved for the progress report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_mailer=info")),
        )
        .init();

    let rule = "=".repeat(60);
    println!("\n{rule}\n🤖 AUTOMATED RESUME EMAIL SENDER BOT\n{rule}\n");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        sender = %config.sender_email,
        host = %config.smtp_host,
        port = %config.smtp_port,
        recruiters = %config.recruiters_csv.display(),
        resume = %config.resume_path.display(),
        delay_secs = config.delay.as_secs_f64(),
        "Configuration loaded"
    );

    // A bad recruiter list aborts before anything is sent
    let records = input::load_records(&config.recruiters_csv)?;

    let runner = BatchRunner::new(
        config.credentials(),
        SmtpTransport::new(),
        TokioPacer,
        ConsoleReporter,
    );
    let result = runner
        .run(&records, &config.resume_path, config.delay)
        .await;

    if result.failed_count > 0 {
        tracing::warn!(failed = result.failed_count, "Some emails were not sent");
    }

    println!("🎉 All done! Check your sent folder to verify.");

    Ok(())
}
