//! Domain model of a payment order and the storage port it is persisted through.

pub mod payment;
pub mod ports;
