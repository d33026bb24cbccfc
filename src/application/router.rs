/// Path that creates a payment.
pub const CREATE_PATH: &str = "/pedidos/pagamento";
/// Prefix of the webhook path that updates a payment's status.
pub const WEBHOOK_PREFIX: &str = "/pedidos/webhook/";
/// Suffix of the webhook path that updates a payment's status.
pub const PAYMENT_SUFFIX: &str = "/pagamento";

const POST: &str = "POST";

/// Handler selected for an inbound path and method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreatePayment,
    UpdatePaymentStatus,
    NotFound,
}

impl Route {
    /// Selects the handler for `path` and `method`.
    ///
    /// A webhook path matches when it starts with the prefix and ends with the
    /// suffix. The two may share characters, so `/pedidos/webhook/pagamento`
    /// reaches the update handler and is rejected there for its missing id.
    pub fn resolve(path: &str, method: &str) -> Self {
        if method != POST {
            return Route::NotFound;
        }
        if path == CREATE_PATH {
            return Route::CreatePayment;
        }
        if path.starts_with(WEBHOOK_PREFIX) && path.ends_with(PAYMENT_SUFFIX) {
            return Route::UpdatePaymentStatus;
        }
        Route::NotFound
    }
}
