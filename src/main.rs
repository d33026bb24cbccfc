use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pagamentos::application::handler::RequestHandler;
use pagamentos::domain::ports::PaymentStoreBox;
use pagamentos::infrastructure::in_memory::InMemoryPaymentStore;
use pagamentos::interfaces::jsonl::event_reader::EventReader;
use pagamentos::interfaces::jsonl::response_writer::ResponseWriter;
use pagamentos::telemetry;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON-lines file of gateway events, or `-` for stdin
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "PAGAMENTOS_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Table (column family) holding payment orders
    #[arg(long, env = "PAGAMENTOS_TABLE", default_value = "tabela_pagamentos")]
    table: String,
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>, table: &str) -> Result<PaymentStoreBox> {
    use pagamentos::infrastructure::rocksdb::RocksDBStore;

    match db_path {
        Some(path) => {
            let store = RocksDBStore::open(path, table).into_diagnostic()?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(InMemoryPaymentStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>, _table: &str) -> Result<PaymentStoreBox> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryPaymentStore::new()))
}

fn open_input(input: &Path) -> Result<Box<dyn Read>> {
    if input.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(input).into_diagnostic()?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let handler = RequestHandler::new(open_store(cli.db_path, &cli.table)?);
    let reader = EventReader::new(open_input(&cli.input)?);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    for event in reader.events() {
        match event {
            Ok(event) => {
                let response = handler.handle(&event).await;
                writer.write_response(&response).into_diagnostic()?;
            }
            Err(e) => {
                tracing::error!("Error reading event: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
