use crate::domain::payment::{
    CreatePaymentRequest, PaymentOrder, UpdateStatusRequest, parse_body, parse_payment_id,
    require_identifier,
};
use crate::domain::ports::{PaymentStore, PaymentStoreBox};
use crate::error::RequestError;
use chrono::Utc;
use tracing::error;

/// Create and status-update operations on payment orders.
///
/// Each call validates its input and issues exactly one storage call; a
/// request rejected by validation never reaches the store.
pub struct PaymentService {
    store: PaymentStoreBox,
}

impl PaymentService {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn PaymentStore {
        self.store.as_ref()
    }

    /// Validates `body` and writes the resulting order, replacing any order
    /// already stored under the same id.
    pub async fn create_payment(&self, body: Option<&str>) -> Result<PaymentOrder, RequestError> {
        let request = CreatePaymentRequest::from_body(body)?;
        let order = request.into_order(Utc::now());

        if let Err(e) = self.store.put(order.clone()).await {
            error!(payment_id = order.id, "Erro ao criar pagamento: {}", e);
            return Err(e.into());
        }
        Ok(order)
    }

    /// Sets the status of the order identified by `id` from the `estado`
    /// field of `body`. No other field is modified.
    pub async fn update_payment_status(
        &self,
        id: Option<&str>,
        body: Option<&str>,
    ) -> Result<PaymentOrder, RequestError> {
        let fields = parse_body(body)?;
        let raw_id = require_identifier(id)?;
        let request = UpdateStatusRequest::from_fields(fields)?;
        let id = parse_payment_id(raw_id)?;

        match self.store.update_status(id, request.status).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => Err(RequestError::NotFound),
            Err(e) => {
                error!(payment_id = id, "Erro ao atualizar status do pagamento: {}", e);
                Err(e.into())
            }
        }
    }
}
