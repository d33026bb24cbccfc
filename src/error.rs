use thiserror::Error;

/// Failures raised by the storage layer.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Everything a request can fail with, each variant carrying the status code
/// it is answered with.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Erro no corpo da requisição: {0}")]
    MalformedInput(String),
    #[error("Campo {} é obrigatório", first_missing(.0))]
    MissingFields(Vec<&'static str>),
    #[error("Campo inválido: {0}")]
    InvalidField(String),
    #[error("ID é obrigatório")]
    MissingIdentifier,
    #[error("ID inválido: {0}")]
    InvalidIdentifier(String),
    #[error("Pagamento não encontrado")]
    NotFound,
    #[error("Endpoint não encontrado")]
    RouteNotFound,
    #[error(transparent)]
    Storage(#[from] PaymentError),
}

fn first_missing(fields: &[&'static str]) -> &'static str {
    fields.first().copied().unwrap_or_default()
}

impl RequestError {
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::MalformedInput(_)
            | RequestError::MissingFields(_)
            | RequestError::InvalidField(_)
            | RequestError::MissingIdentifier
            | RequestError::InvalidIdentifier(_) => 400,
            RequestError::NotFound | RequestError::RouteNotFound => 404,
            RequestError::Storage(_) => 500,
        }
    }
}
