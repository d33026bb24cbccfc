use crate::error::{PaymentError, Result};
use crate::interfaces::gateway::GatewayEvent;
use std::io::{BufRead, BufReader, Read};

/// Reads gateway events from a JSON-lines source, one event per line.
///
/// Blank lines are skipped.
pub struct EventReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    ///
    /// A malformed line yields an error and does not stop the stream.
    pub fn events(self) -> impl Iterator<Item = Result<GatewayEvent>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(PaymentError::from)),
            Err(e) => Some(Err(PaymentError::from(e))),
        })
    }
}
