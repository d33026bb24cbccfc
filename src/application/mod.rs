//! Application layer: routing of gateway events and the two payment
//! operations behind it.
//!
//! `RequestHandler` is the entry point. It owns a `PaymentService`, which in
//! turn owns the storage backend; both are built once at process start and
//! shared by reference across requests.

pub mod handler;
pub mod payments;
pub mod router;
