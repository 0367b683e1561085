//! Console configuration.

use serde::{Deserialize, Serialize};

use crate::transport::TransportConfig;

/// Configuration for one console instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Serial line settings handed to the transport driver at startup.
    pub transport: TransportConfig,
    /// Upper bound on waiting for one transmit completion, in milliseconds.
    /// An unresponsive transmit must not wedge the console forever.
    pub tx_wait_ms: u64,
    /// Capacity of the buffer the command interpreter writes each output
    /// chunk into.
    pub output_capacity: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            tx_wait_ms: 100,
            output_capacity: 256,
        }
    }
}
