//! Lendshelf - library record management
//!
//! Opens the configured data stores and prints the library report along
//! with any overdue loans.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use lendshelf::{
    config::{LogFormat, LoggingConfig},
    AppConfig, Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Lendshelf v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.storage.data_dir.display());

    let library = Library::from_config(&config);

    println!("=== Library Report ===");
    println!("{}", library.library_report());

    let overdue = library.overdue_details();
    if !overdue.is_empty() {
        println!("\n=== Overdue Books ===");
        for entry in overdue {
            println!(
                "{} | Borrowed by: {} | Overdue by: {} days",
                entry.book,
                entry.holder_name.as_deref().unwrap_or("unknown member"),
                entry.overdue_days.unwrap_or_default()
            );
        }
    }

    Ok(())
}

/// Install the global subscriber. The returned guard flushes file logs on drop.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lendshelf={}", logging.level)));

    let (writer, guard) = match &logging.file {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "lendshelf.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    match logging.format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Pretty => registry.with(layer).init(),
    }

    guard
}
