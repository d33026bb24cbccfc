#![allow(dead_code)]

use async_trait::async_trait;
use pagamentos::domain::payment::{PaymentId, PaymentOrder};
use pagamentos::domain::ports::PaymentStore;
use pagamentos::error::{PaymentError, Result};
use pagamentos::infrastructure::in_memory::InMemoryPaymentStore;
use pagamentos::interfaces::gateway::GatewayEvent;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn create_body(id: i64) -> String {
    json!({
        "id": id,
        "id_pedido": 55,
        "estado": "pendente",
        "valor": 100.0,
        "metodo": "pix",
    })
    .to_string()
}

pub fn create_event(body: &str) -> GatewayEvent {
    GatewayEvent::new("POST", "/pedidos/pagamento").with_body(body)
}

pub fn update_event(id: &str, status: &str) -> GatewayEvent {
    GatewayEvent::new("POST", &format!("/pedidos/webhook/{id}/pagamento"))
        .with_path_parameter("id", id)
        .with_body(json!({ "estado": status }).to_string())
}

pub fn write_events(path: &Path, events: &[GatewayEvent]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for event in events {
        writeln!(file, "{}", serde_json::to_string(event)?)?;
    }
    Ok(())
}

/// Wraps an in-memory store and counts the writes it receives.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryPaymentStore,
    writes: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentStore for RecordingStore {
    async fn put(&self, order: PaymentOrder) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.put(order).await
    }

    async fn update_status(&self, id: PaymentId, status: String) -> Result<Option<PaymentOrder>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update_status(id, status).await
    }

    async fn get(&self, id: PaymentId) -> Result<Option<PaymentOrder>> {
        self.inner.get(id).await
    }

    async fn all(&self) -> Result<Vec<PaymentOrder>> {
        self.inner.all().await
    }
}

/// A store whose every call fails.
pub struct FailingStore;

fn unavailable() -> PaymentError {
    PaymentError::InternalError("table unavailable".into())
}

#[async_trait]
impl PaymentStore for FailingStore {
    async fn put(&self, _order: PaymentOrder) -> Result<()> {
        Err(unavailable())
    }

    async fn update_status(&self, _id: PaymentId, _status: String) -> Result<Option<PaymentOrder>> {
        Err(unavailable())
    }

    async fn get(&self, _id: PaymentId) -> Result<Option<PaymentOrder>> {
        Err(unavailable())
    }

    async fn all(&self) -> Result<Vec<PaymentOrder>> {
        Err(unavailable())
    }
}
