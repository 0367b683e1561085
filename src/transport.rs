//! Serial transport boundary.
//!
//! Byte-oriented, full-duplex, one pending operation per direction. The
//! driver never blocks: `begin_*` arms the hardware and returns, and the
//! completion interrupt raises the bound [`CompletionSignal`] exactly once
//! per operation. Blocking, if any, happens at the caller via the signal.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::CompletionSignal;

/// Transport driver errors.
///
/// Only configuration failures are fatal to the console; arming failures
/// are absorbed by the loop.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport configuration failed: {0}")]
    Config(String),
    #[error("completion signals not registered")]
    NotConfigured,
    #[error("transport closed")]
    Closed,
    #[error("receive already in flight")]
    ReceiveInFlight,
    #[error("transmit already in flight")]
    TransmitInFlight,
}

/// Parity setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Stop bit setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopBits {
    One,
    Two,
}

/// Line configuration. Baud and framing are configuration, not part of the
/// console's contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub baud_rate: u32,
    pub data_bits: u8,
    pub stop_bits: StopBits,
    pub parity: Parity,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            data_bits: 8,
            stop_bits: StopBits::One,
            parity: Parity::None,
        }
    }
}

/// Single-byte landing slot for an in-flight receive.
///
/// Written by the receive interrupt, read by the console task after the
/// rx-done signal. Single writer, single reader; the signal orders the
/// handoff, the atomic keeps it tear-free.
#[derive(Clone, Debug)]
pub struct RxSlot(Arc<AtomicU8>);

impl RxSlot {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU8::new(0)))
    }

    /// Driver side: deposit the received byte. Release pairs with `take`.
    pub fn store(&self, byte: u8) {
        self.0.store(byte, Ordering::Release);
    }

    /// Task side: read the byte deposited by the last completed receive.
    pub fn take(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for RxSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Asynchronous serial transport driver.
///
/// Implementations guarantee at most one outstanding receive and one
/// outstanding transmit; callers must observe a completion before arming
/// the same direction again.
pub trait SerialTransport {
    /// Apply line configuration. A failure here is the one fatal condition
    /// of the console: there is no recovery path without a working
    /// transport.
    fn configure(&mut self, config: &TransportConfig) -> Result<(), TransportError>;

    /// Register the completion signals, once at startup. Each subsequent
    /// operation reports its completion by raising the matching signal
    /// from interrupt context.
    fn register_completions(
        &mut self,
        rx_done: Arc<CompletionSignal>,
        tx_done: Arc<CompletionSignal>,
    );

    /// Arm exactly one asynchronous single-byte receive into `slot` and
    /// return without blocking.
    fn begin_receive(&mut self, slot: &RxSlot) -> Result<(), TransportError>;

    /// Arm exactly one asynchronous transmit of `data` and return without
    /// blocking. A no-op for empty input. The driver must finish with the
    /// borrowed bytes (transmit or copy them) before returning.
    fn begin_transmit(&mut self, data: &[u8]) -> Result<(), TransportError>;
}
