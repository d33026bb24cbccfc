//! Edge types: the gateway event/response shapes and the JSON-lines stream
//! the binary reads them from.

pub mod gateway;
pub mod jsonl;
