use crate::domain::payment::{PaymentId, PaymentOrder};
use crate::domain::ports::PaymentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment orders.
///
/// Uses `Arc<RwLock<BTreeMap<i64, PaymentOrder>>>` so clones share the same
/// records. Status updates check and write under a single write lock.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    orders: Arc<RwLock<BTreeMap<PaymentId, PaymentOrder>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn put(&self, order: PaymentOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn update_status(&self, id: PaymentId, status: String) -> Result<Option<PaymentOrder>> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(&id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn get(&self, id: PaymentId) -> Result<Option<PaymentOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<PaymentOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}
