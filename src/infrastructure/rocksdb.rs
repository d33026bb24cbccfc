use crate::domain::payment::{PaymentId, PaymentOrder};
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Default table (column family) holding payment orders.
pub const DEFAULT_TABLE: &str = "tabela_pagamentos";

/// A persistent store implementation using RocksDB.
///
/// Orders live in a single column family named after the table. Keys are the
/// order id as big-endian bytes with the sign bit flipped, so iteration
/// follows numeric order; values are the JSON-encoded record.
///
/// `Clone` shares the underlying `Arc<DB>` and the write lock.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    table: String,
    // Serializes writes so a status update never races a full overwrite.
    write_lock: Arc<Mutex<()>>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path` holding `table`.
    pub fn open<P: AsRef<Path>>(path: P, table: &str) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf = ColumnFamilyDescriptor::new(table, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf])?;

        Ok(Self {
            db: Arc::new(db),
            table: table.to_string(),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn table(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(&self.table).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(format!(
                "Column family {} not found",
                self.table
            ))))
        })
    }

    fn read(&self, id: PaymentId) -> Result<Option<PaymentOrder>> {
        let cf = self.table()?;
        match self.db.get_pinned_cf(cf, encode_key(id))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write(&self, order: &PaymentOrder) -> Result<()> {
        let cf = self.table()?;
        let value = serde_json::to_vec(order)?;
        self.db.put_cf(cf, encode_key(order.id), value)?;
        Ok(())
    }
}

fn encode_key(id: PaymentId) -> [u8; 8] {
    ((id as u64) ^ (1 << 63)).to_be_bytes()
}

#[async_trait]
impl PaymentStore for RocksDBStore {
    async fn put(&self, order: PaymentOrder) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write(&order)
    }

    async fn update_status(&self, id: PaymentId, status: String) -> Result<Option<PaymentOrder>> {
        let _guard = self.write_lock.lock().await;
        let Some(mut order) = self.read(id)? else {
            return Ok(None);
        };
        order.status = status;
        self.write(&order)?;
        Ok(Some(order))
    }

    async fn get(&self, id: PaymentId) -> Result<Option<PaymentOrder>> {
        self.read(id)
    }

    async fn all(&self) -> Result<Vec<PaymentOrder>> {
        let cf = self.table()?;
        let mut orders = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            orders.push(serde_json::from_slice(&value)?);
        }
        Ok(orders)
    }
}
