use super::payments::PaymentService;
use super::router::Route;
use crate::domain::ports::PaymentStoreBox;
use crate::interfaces::gateway::{GatewayEvent, GatewayResponse};
use tracing::info;

pub const PAYMENT_CREATED: &str = "Pagamento criado com sucesso";
pub const STATUS_UPDATED: &str = "Status atualizado com sucesso";

/// Dispatches gateway events to the payment operations and turns their
/// outcome into a gateway response.
///
/// Holds no per-request state, so a single instance can serve any number of
/// concurrent requests.
pub struct RequestHandler {
    payments: PaymentService,
}

impl RequestHandler {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self {
            payments: PaymentService::new(store),
        }
    }

    pub fn payments(&self) -> &PaymentService {
        &self.payments
    }

    pub async fn handle(&self, event: &GatewayEvent) -> GatewayResponse {
        let path = event.path.as_deref().unwrap_or_default();
        let method = event.http_method.as_deref().unwrap_or_default();

        match Route::resolve(path, method) {
            Route::CreatePayment => {
                info!("Inicio da criação de pagamento");
                match self.payments.create_payment(event.body.as_deref()).await {
                    Ok(_) => GatewayResponse::message(PAYMENT_CREATED),
                    Err(e) => e.into(),
                }
            }
            Route::UpdatePaymentStatus => {
                info!("Inicio da atualização de status de pagamento");
                match self
                    .payments
                    .update_payment_status(
                        event.path_parameter("id").as_deref(),
                        event.body.as_deref(),
                    )
                    .await
                {
                    Ok(_) => GatewayResponse::message(STATUS_UPDATED),
                    Err(e) => e.into(),
                }
            }
            Route::NotFound => GatewayResponse::not_found(),
        }
    }
}
