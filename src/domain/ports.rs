use super::payment::{PaymentId, PaymentOrder};
use crate::error::Result;
use async_trait::async_trait;

/// Keyed record store holding payment orders.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Writes `order` under its id, replacing any existing record.
    async fn put(&self, order: PaymentOrder) -> Result<()>;

    /// Sets the status of an existing order and returns the updated record.
    ///
    /// Returns `Ok(None)` without writing anything when no order is stored
    /// under `id`.
    async fn update_status(&self, id: PaymentId, status: String) -> Result<Option<PaymentOrder>>;

    /// Reads the order stored under `id`, if any.
    ///
    /// Neither route reads records back; this and `all` exist for inspecting
    /// a store from tools and tests.
    async fn get(&self, id: PaymentId) -> Result<Option<PaymentOrder>>;

    /// Every stored order, in ascending id order.
    async fn all(&self) -> Result<Vec<PaymentOrder>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
